use battwatch_bridge::power::ChargerType;

use crate::lowbattery::LowBatteryNotifier;

/// Long-lived bookkeeping the notifier carries across events.
///
/// Invariant: `low_battery` is `Some` only while the battery is low and not
/// charging; it is dropped on charging start and on `Full`/`Ok` transitions.
pub(crate) struct NotifierState {
    /// Charger type before the newest charger-type event was applied. The
    /// handler compares against this value first and persists the new type
    /// afterwards.
    pub last_charger_type: ChargerType,
    /// Whether the screen lock is currently engaged.
    pub screen_lock_active: bool,
    /// The low-battery sub-notifier, while alerts are being repeated.
    pub low_battery: Option<LowBatteryNotifier>,
}

impl Default for NotifierState {
    fn default() -> Self {
        Self {
            last_charger_type: ChargerType::Unknown,
            screen_lock_active: false,
            low_battery: None,
        }
    }
}
