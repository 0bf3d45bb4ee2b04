use serde::{Deserialize, Serialize};

/// Configuration for the battery sensor layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatteryConfig {
    /// Name of the power supply entry under `/sys/class/power_supply` to
    /// watch. Only the first battery is supported.
    pub supply_name: String,
    /// Interval in seconds between sensor polls.
    pub poll_interval_secs: u64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            supply_name: "BAT0".to_string(),
            poll_interval_secs: 2,
        }
    }
}

/// Tunables for the notification policy itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// Chargers supplying at most this many milliamps over USB are reported
    /// as too weak to charge.
    pub usb_current_threshold_ma: i32,
    /// Window in seconds during which a displayed banner may still be
    /// silently retracted by a superseding event.
    pub debounce_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            usb_current_threshold_ma: 100,
            debounce_secs: 5,
        }
    }
}

/// Cadence of repeated low-battery alerts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LowBatteryConfig {
    /// Seconds between alerts while the screen is unlocked.
    pub unlocked_interval_secs: u64,
    /// Seconds between alerts while the screen lock is active.
    pub locked_interval_secs: u64,
}

impl Default for LowBatteryConfig {
    fn default() -> Self {
        Self {
            unlocked_interval_secs: 300,
            locked_interval_secs: 1800,
        }
    }
}

/// Configuration for the indicator LED sink.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LedConfig {
    /// Name of the LED device under `/sys/class/leds` used for battery
    /// patterns. When unset, pattern changes are only logged.
    pub device: Option<String>,
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for the battery sensor layer.
    pub battery: BatteryConfig,
    /// Tunables for the notification policy.
    pub notifier: NotifierConfig,
    /// Cadence of repeated low-battery alerts.
    pub low_battery: LowBatteryConfig,
    /// Configuration for the indicator LED sink.
    pub led: LedConfig,
}
