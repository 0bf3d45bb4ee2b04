//! Translation of power-state events into banner and LED side effects.

use std::sync::Arc;
use std::time::Duration;

use battwatch_bridge::config::Config;
use battwatch_bridge::notification::{
    LedSink, NotificationSink, PATTERN_BATTERY_CHARGING, PATTERN_BATTERY_FULL,
};
use battwatch_bridge::power::{
    BatteryProbe, BatteryStatus, ChargerType, ChargingState, PowerSaveMode,
};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::banner::{self, BannerKind, IconHint};
use crate::lowbattery::LowBatteryNotifier;
use crate::state::NotifierState;

/// Policy tunables derived from the application [`Config`].
pub(crate) struct Tuning {
    pub usb_current_threshold_ma: i32,
    pub debounce: Duration,
    pub low_battery_unlocked: Duration,
    pub low_battery_locked: Duration,
}

impl From<&Config> for Tuning {
    fn from(config: &Config) -> Self {
        Self {
            usb_current_threshold_ma: config.notifier.usb_current_threshold_ma,
            debounce: Duration::from_secs(config.notifier.debounce_secs),
            low_battery_unlocked: Duration::from_secs(config.low_battery.unlocked_interval_secs),
            low_battery_locked: Duration::from_secs(config.low_battery.locked_interval_secs),
        }
    }
}

/// The single banner currently outstanding at the sink.
struct ActiveBanner {
    id: u32,
    category: &'static str,
    /// Until this deadline the banner may still be silently retracted by a
    /// superseding event; afterwards it is left displayed.
    deadline: Instant,
}

/// Deterministic translator from power events to notification and LED calls.
///
/// All entry points run on the notifier's single dispatch task and never
/// block; the only timing element is the per-banner debounce deadline and the
/// sub-notifier's own alert cadence.
pub(crate) struct PowerStateNotifier {
    notification: Box<dyn NotificationSink + Send>,
    led: Box<dyn LedSink + Send>,
    probe: Arc<dyn BatteryProbe + Send + Sync>,
    alert_tx: mpsc::Sender<()>,
    tuning: Tuning,
    state: NotifierState,
    active: Option<ActiveBanner>,
}

impl PowerStateNotifier {
    pub(crate) fn new(
        notification: Box<dyn NotificationSink + Send>,
        led: Box<dyn LedSink + Send>,
        probe: Arc<dyn BatteryProbe + Send + Sync>,
        alert_tx: mpsc::Sender<()>,
        tuning: Tuning,
    ) -> Self {
        Self {
            notification,
            led,
            probe,
            alert_tx,
            tuning,
            state: NotifierState::default(),
            active: None,
        }
    }

    /// Applies the probe's current readings once, so a device started on a
    /// charger immediately shows the matching banner and LED pattern.
    pub(crate) fn seed_initial_state(&mut self) {
        self.on_charging_state_changed(self.probe.charging_state());
        self.on_battery_status_changed(self.probe.battery_status());
    }

    pub(crate) fn on_charging_state_changed(&mut self, state: ChargingState) {
        match state {
            ChargingState::Charging => {
                if self.probe.charger_type() == ChargerType::Usb
                    && self.probe.current_flow_ma() <= self.tuning.usb_current_threshold_ma
                {
                    self.dispatch(BannerKind::InsufficientPower);
                } else {
                    // Low battery alerts are not raised while charging.
                    self.stop_low_battery_notifier();

                    self.suppress(&[
                        banner::CATEGORY_REMOVE_CHARGER,
                        banner::CATEGORY_CHARGING_COMPLETE,
                        banner::CATEGORY_LOW_BATTERY,
                    ]);
                    self.dispatch(BannerKind::Charging);
                }
            }

            ChargingState::NotCharging => self.dispatch(BannerKind::ChargingNotStarted),

            _ => {
                self.suppress(&[banner::CATEGORY_BATTERY]);
                self.led.deactivate(PATTERN_BATTERY_CHARGING);
            }
        }
    }

    pub(crate) fn on_battery_status_changed(&mut self, status: BatteryStatus) {
        match status {
            BatteryStatus::Full => {
                self.stop_low_battery_notifier();
                self.suppress(&[banner::CATEGORY_BATTERY]);
                self.dispatch(BannerKind::ChargingComplete);
            }

            BatteryStatus::Ok => self.stop_low_battery_notifier(),

            BatteryStatus::Low => {
                // Alerts are only worth repeating while the battery drains.
                if self.probe.charging_state() != ChargingState::Charging {
                    self.start_low_battery_notifier();
                }
            }

            BatteryStatus::Empty => self.dispatch(BannerKind::RechargeBattery),

            _ => {}
        }
    }

    pub(crate) fn on_charger_type_changed(&mut self, charger_type: ChargerType) {
        if charger_type == ChargerType::Unknown {
            // The reminder to unplug the charger from the wall is pointless
            // for USB cables, so it keys on the type that just went away.
            if self.state.last_charger_type == ChargerType::Wall {
                self.suppress(&[banner::CATEGORY_BATTERY, banner::CATEGORY_CHARGING_COMPLETE]);
                self.dispatch(BannerKind::RemoveCharger);
            }

            if self.state.last_charger_type != ChargerType::Unknown
                && self.state.last_charger_type != ChargerType::Usb
                && self.probe.battery_status() == BatteryStatus::Low
                && self.probe.charging_state() != ChargingState::Charging
            {
                // A charger was connected but no longer is, and the battery
                // is low.
                self.start_low_battery_notifier();
            }
        }

        self.state.last_charger_type = charger_type;
    }

    pub(crate) fn on_power_save_mode_changed(&mut self, mode: PowerSaveMode) {
        match mode {
            PowerSaveMode::Off => self.dispatch(BannerKind::ExitingPowerSave),
            PowerSaveMode::On => self.dispatch(BannerKind::EnteringPowerSave),
            _ => {}
        }
    }

    pub(crate) fn set_screen_lock_active(&mut self, active: bool) {
        self.state.screen_lock_active = active;
        if let Some(low_battery) = &self.state.low_battery {
            low_battery.set_screen_lock_active(active);
        }
    }

    /// Handles an alert looped back from the sub-notifier. A teardown can
    /// race an alert already in the queue; such alerts are ignored.
    pub(crate) fn on_low_battery_alert(&mut self) {
        if self.state.low_battery.is_some() {
            self.dispatch(BannerKind::LowBattery);
        }
    }

    /// Resolves the banner's fixed triple, issues it to the sink, and records
    /// it as the active banner with a fresh debounce deadline.
    fn dispatch(&mut self, kind: BannerKind) {
        match kind {
            BannerKind::Charging => self.led.activate(PATTERN_BATTERY_CHARGING),
            BannerKind::ChargingComplete => self.led.activate(PATTERN_BATTERY_FULL),
            BannerKind::ChargingNotStarted => self.led.deactivate(PATTERN_BATTERY_CHARGING),
            _ => {}
        }

        let icon = match kind.icon() {
            IconHint::None => None,
            IconHint::ChargeLevel => Some(self.charging_icon()),
            IconHint::Fixed(icon) => Some(icon),
        };

        log::debug!("Dispatching {kind:?} banner");
        let id = self.notification.display(kind.category(), kind.body(), icon);
        self.active = Some(ActiveBanner {
            id,
            category: kind.category(),
            deadline: Instant::now() + self.tuning.debounce,
        });
    }

    /// Retracts the active banner if its category matches and its debounce
    /// window is still open; otherwise the banner stays displayed.
    fn suppress(&mut self, categories: &[&str]) {
        let Some(active) = &self.active else {
            return;
        };
        if !categories.contains(&active.category) || Instant::now() >= active.deadline {
            return;
        }

        let id = active.id;
        log::debug!("Retracting banner {id} ({})", active.category);
        self.notification.close(id);
        self.active = None;
    }

    fn charging_icon(&self) -> &'static str {
        // Capacity floor of 1 guards the division on probes reporting 0.
        let maximum = match self.probe.maximum_capacity() {
            0 => 1,
            value => value,
        };
        // Capacities can be raw µAh/µWh readings, so the scaling must not
        // stay in i32.
        let percent = (self.probe.remaining_capacity() as i64 * 100 / maximum as i64) as i32;
        banner::charge_level_icon(percent)
    }

    fn start_low_battery_notifier(&mut self) {
        let screen_lock_active = self.state.screen_lock_active;
        if self.state.low_battery.is_none() {
            self.state.low_battery = Some(LowBatteryNotifier::start(
                self.alert_tx.clone(),
                self.tuning.low_battery_unlocked,
                self.tuning.low_battery_locked,
                screen_lock_active,
            ));
        }

        if let Some(low_battery) = &self.state.low_battery {
            low_battery.set_screen_lock_active(screen_lock_active);
            low_battery.send_alert();
        }
    }

    fn stop_low_battery_notifier(&mut self) {
        self.state.low_battery = None;
    }
}
