use serde::{Deserialize, Serialize};

/// Charging state reported by the battery sensor layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargingState {
    /// The sensor could not determine the charging state.
    Unknown,
    /// Current is flowing into the battery.
    Charging,
    /// The device is running off the battery.
    Discharging,
    /// A charger is attached but charging did not start (e.g. the charger is
    /// too weak or faulty).
    NotCharging,
    /// The battery is full and the charger keeps it topped up.
    Idle,
}

/// Coarse battery charge classification reported by the sensor layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStatus {
    /// The sensor could not determine the battery status.
    Unknown,
    /// The battery is about to shut the device down.
    Empty,
    /// The battery is low enough to warrant user alerts.
    Low,
    /// The battery is at a normal operating level.
    Ok,
    /// The battery is fully charged.
    Full,
}

/// Classification of the attached power source.
///
/// `Unknown` doubles as "nothing attached": the sensor layer reports it when
/// the charger is unplugged, which is what the remove-charger reminder keys
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerType {
    /// No charger attached, or the type could not be determined.
    Unknown,
    /// USB host or dedicated USB charging port.
    Usb,
    /// Dedicated wall charger.
    Wall,
    /// Variable-current charger.
    Variable,
}

/// Device-wide power save mode state, toggled independently of charging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSaveMode {
    /// The sensor could not determine the power save mode state.
    Unknown,
    /// Power save mode is active.
    On,
    /// Power save mode is inactive.
    Off,
}

/// Synchronous, point-in-time battery readings.
///
/// The notifier queries this at dispatch time instead of caching sensor
/// values, matching the way the handlers cross-check the live charging state
/// before raising low-battery alerts. Implementations must be cheap and must
/// not block; read failures degrade to `Unknown`/zero rather than erroring.
pub trait BatteryProbe {
    /// Current charging state.
    fn charging_state(&self) -> ChargingState;

    /// Current coarse battery status.
    fn battery_status(&self) -> BatteryStatus;

    /// Type of the currently attached power source.
    fn charger_type(&self) -> ChargerType;

    /// Magnitude of the current flowing through the battery, in milliamps.
    fn current_flow_ma(&self) -> i32;

    /// Remaining battery capacity, in implementation-defined units.
    fn remaining_capacity(&self) -> i32;

    /// Design maximum battery capacity, in the same units as
    /// [`BatteryProbe::remaining_capacity`].
    fn maximum_capacity(&self) -> i32;
}
