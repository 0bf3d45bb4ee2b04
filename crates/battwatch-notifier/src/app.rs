//! Event dispatch loop for the power-state notifier.
//!
//! One event maps to one handler; low-battery alerts loop back through their
//! own channel so every side effect still runs on this single task.

use battwatch_bridge::MessageToNotifier;
use tokio::sync::mpsc::Receiver;

use crate::notifier::PowerStateNotifier;

/// Seeds the notifier from current sensor readings, then dispatches power
/// events until the bridge closes.
pub(crate) async fn consume_power_events(
    mut notifier: PowerStateNotifier,
    mut rx: Receiver<MessageToNotifier>,
    mut alert_rx: Receiver<()>,
) {
    notifier.seed_initial_state();

    loop {
        tokio::select! {
            message = rx.recv() => {
                match message {
                    Some(message) => {
                        log::debug!("Got a power event: {message:?}");
                        dispatch_message(&mut notifier, message);
                    }
                    None => break,
                }
            }
            Some(()) = alert_rx.recv() => {
                notifier.on_low_battery_alert();
            }
        }
    }
}

/// Dispatches a power event down to the matching notifier handler.
fn dispatch_message(notifier: &mut PowerStateNotifier, message: MessageToNotifier) {
    match message {
        MessageToNotifier::ChargingStateChanged(state) => {
            notifier.on_charging_state_changed(state);
        }
        MessageToNotifier::BatteryStatusChanged(status) => {
            notifier.on_battery_status_changed(status);
        }
        MessageToNotifier::ChargerTypeChanged(charger_type) => {
            notifier.on_charger_type_changed(charger_type);
        }
        MessageToNotifier::PowerSaveModeChanged(mode) => {
            notifier.on_power_save_mode_changed(mode);
        }
        MessageToNotifier::ScreenLockChanged(active) => {
            notifier.set_screen_lock_active(active);
        }
    }
}
