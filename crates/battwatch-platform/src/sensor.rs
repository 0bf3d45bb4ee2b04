//! Polls the battery probe and turns state changes into power events.
//!
//! The notifier only wants edges, not levels: this module keeps the previous
//! snapshot and forwards a [`MessageToNotifier`] per changed field. Power save
//! mode and screen lock have no sysfs source here and are fed by other
//! collaborators over the same channel.

use std::sync::Arc;
use std::time::Duration;

use battwatch_bridge::MessageToNotifier;
use battwatch_bridge::power::{BatteryStatus, ChargerType, ChargingState};
use tokio::sync::mpsc::Sender;

use crate::battery::SysfsBatteryProbe;

/// Point-in-time view of the fields the poller watches for edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSnapshot {
    /// Current charging state.
    pub charging_state: ChargingState,
    /// Current coarse battery status.
    pub battery_status: BatteryStatus,
    /// Type of the attached power source.
    pub charger_type: ChargerType,
}

impl Default for PowerSnapshot {
    fn default() -> Self {
        Self {
            charging_state: ChargingState::Unknown,
            battery_status: BatteryStatus::Unknown,
            charger_type: ChargerType::Unknown,
        }
    }
}

/// Computes the events needed to move a consumer from `previous` to `next`.
///
/// Charger type is reported first so that a charging-state handler already
/// sees the new charger classification through its probe.
pub fn diff_events(previous: &PowerSnapshot, next: &PowerSnapshot) -> Vec<MessageToNotifier> {
    let mut events = Vec::new();
    if next.charger_type != previous.charger_type {
        events.push(MessageToNotifier::ChargerTypeChanged(next.charger_type));
    }
    if next.charging_state != previous.charging_state {
        events.push(MessageToNotifier::ChargingStateChanged(next.charging_state));
    }
    if next.battery_status != previous.battery_status {
        events.push(MessageToNotifier::BatteryStatusChanged(next.battery_status));
    }
    events
}

/// Polls the probe until the notifier side of the channel closes.
///
/// The initial snapshot is taken without emitting events; the notifier seeds
/// itself from the same probe on startup.
pub async fn poll_power_events(
    probe: Arc<SysfsBatteryProbe>,
    tx: Sender<MessageToNotifier>,
    poll_interval: Duration,
) {
    log::info!("Power sensor poller started (interval: {poll_interval:?})");

    let mut previous = probe.snapshot();
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.tick().await; // immediate first tick

    loop {
        ticker.tick().await;
        let next = probe.snapshot();
        for event in diff_events(&previous, &next) {
            log::debug!("Power event: {event:?}");
            if tx.send(event).await.is_err() {
                log::info!("Notifier channel closed, stopping sensor poller");
                return;
            }
        }
        previous = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_snapshots_produce_no_events() {
        let snapshot = PowerSnapshot {
            charging_state: ChargingState::Charging,
            battery_status: BatteryStatus::Ok,
            charger_type: ChargerType::Wall,
        };
        assert!(diff_events(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn each_changed_field_produces_one_event() {
        let previous = PowerSnapshot::default();
        let next = PowerSnapshot {
            charging_state: ChargingState::Charging,
            battery_status: BatteryStatus::Ok,
            charger_type: ChargerType::Wall,
        };

        let events = diff_events(&previous, &next);
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            MessageToNotifier::ChargerTypeChanged(ChargerType::Wall)
        ));
        assert!(matches!(
            events[1],
            MessageToNotifier::ChargingStateChanged(ChargingState::Charging)
        ));
        assert!(matches!(
            events[2],
            MessageToNotifier::BatteryStatusChanged(BatteryStatus::Ok)
        ));
    }

    #[test]
    fn unplug_reports_charger_before_charging_state() {
        let previous = PowerSnapshot {
            charging_state: ChargingState::Charging,
            battery_status: BatteryStatus::Ok,
            charger_type: ChargerType::Wall,
        };
        let next = PowerSnapshot {
            charging_state: ChargingState::Discharging,
            battery_status: BatteryStatus::Ok,
            charger_type: ChargerType::Unknown,
        };

        let events = diff_events(&previous, &next);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            MessageToNotifier::ChargerTypeChanged(ChargerType::Unknown)
        ));
        assert!(matches!(
            events[1],
            MessageToNotifier::ChargingStateChanged(ChargingState::Discharging)
        ));
    }
}
