//! Battery readings from `/sys/class/power_supply`.
//!
//! All reads are synchronous and cheap (single small sysfs files); failures
//! degrade to `Unknown`/zero values instead of erroring, since sensor
//! problems are not the notifier's concern.

use std::fs;
use std::path::PathBuf;

use battwatch_bridge::power::{BatteryProbe, BatteryStatus, ChargerType, ChargingState};

use crate::sensor::PowerSnapshot;

/// Battery probe backed by the Linux power-supply sysfs class.
///
/// Battery readings come from the configured supply entry (typically `BAT0`);
/// the charger type is derived from the sibling non-battery supplies and
/// their `online` flags.
pub struct SysfsBatteryProbe {
    class_dir: PathBuf,
    supply_dir: PathBuf,
}

impl SysfsBatteryProbe {
    /// Creates a probe rooted at the given power-supply class directory.
    pub fn new(class_dir: impl Into<PathBuf>, supply_name: &str) -> Self {
        let class_dir = class_dir.into();
        let supply_dir = class_dir.join(supply_name);
        Self {
            class_dir,
            supply_dir,
        }
    }

    /// Creates a probe for the standard `/sys/class/power_supply` location.
    pub fn with_default_root(supply_name: &str) -> Self {
        Self::new("/sys/class/power_supply", supply_name)
    }

    /// Takes a combined snapshot of the fields the event poller diffs.
    pub fn snapshot(&self) -> PowerSnapshot {
        PowerSnapshot {
            charging_state: self.charging_state(),
            battery_status: self.battery_status(),
            charger_type: self.charger_type(),
        }
    }

    fn read_trimmed(&self, file: &str) -> Option<String> {
        fs::read_to_string(self.supply_dir.join(file))
            .ok()
            .map(|contents| contents.trim().to_string())
    }

    fn read_i64(&self, file: &str) -> Option<i64> {
        self.read_trimmed(file)?.parse().ok()
    }

    /// Returns (remaining, maximum) from a single unit family, so the charge
    /// ratio never pairs a µAh numerator with a µWh denominator.
    fn capacity_pair(&self) -> (i32, i32) {
        if let Some(remaining) = self.read_i64("charge_now") {
            let maximum = self.read_i64("charge_full").unwrap_or(0);
            return (remaining as i32, maximum as i32);
        }
        if let Some(remaining) = self.read_i64("energy_now") {
            let maximum = self.read_i64("energy_full").unwrap_or(0);
            return (remaining as i32, maximum as i32);
        }
        match self.read_i64("capacity") {
            Some(percent) => (percent as i32, 100),
            None => (0, 0),
        }
    }
}

impl BatteryProbe for SysfsBatteryProbe {
    fn charging_state(&self) -> ChargingState {
        match self.read_trimmed("status") {
            Some(status) => parse_charging_state(&status),
            None => ChargingState::Unknown,
        }
    }

    fn battery_status(&self) -> BatteryStatus {
        let level = self.read_trimmed("capacity_level");
        let percent = self.read_i64("capacity");
        battery_status_from(level.as_deref(), percent)
    }

    fn charger_type(&self) -> ChargerType {
        let Ok(entries) = fs::read_dir(&self.class_dir) else {
            return ChargerType::Unknown;
        };

        let mut supplies = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let Ok(kind) = fs::read_to_string(path.join("type")) else {
                continue;
            };
            let online = fs::read_to_string(path.join("online"))
                .map(|flag| flag.trim() == "1")
                .unwrap_or(false);
            supplies.push((kind.trim().to_string(), online));
        }

        charger_type_from_supplies(supplies.iter().map(|(kind, online)| (kind.as_str(), *online)))
    }

    fn current_flow_ma(&self) -> i32 {
        // current_now is in microamps; the sign encodes direction, which the
        // notifier does not care about.
        let microamps = self.read_i64("current_now").unwrap_or(0);
        (microamps.abs() / 1000) as i32
    }

    fn remaining_capacity(&self) -> i32 {
        self.capacity_pair().0
    }

    fn maximum_capacity(&self) -> i32 {
        self.capacity_pair().1
    }
}

/// Maps a power-supply `status` value onto a charging state.
pub(crate) fn parse_charging_state(status: &str) -> ChargingState {
    match status {
        "Charging" => ChargingState::Charging,
        "Discharging" => ChargingState::Discharging,
        "Not charging" => ChargingState::NotCharging,
        "Full" => ChargingState::Idle,
        _ => ChargingState::Unknown,
    }
}

/// Derives a coarse battery status from `capacity_level`, falling back to
/// percentage thresholds when the kernel does not classify the level itself.
pub(crate) fn battery_status_from(level: Option<&str>, percent: Option<i64>) -> BatteryStatus {
    match level {
        Some("Full") => return BatteryStatus::Full,
        Some("High") | Some("Normal") => return BatteryStatus::Ok,
        Some("Low") => return BatteryStatus::Low,
        Some("Critical") => return BatteryStatus::Empty,
        _ => {}
    }

    match percent {
        Some(percent) if percent >= 100 => BatteryStatus::Full,
        Some(percent) if percent <= 2 => BatteryStatus::Empty,
        Some(percent) if percent <= 10 => BatteryStatus::Low,
        Some(_) => BatteryStatus::Ok,
        None => BatteryStatus::Unknown,
    }
}

/// Classifies the attached charger from (supply type, online) pairs.
///
/// Returns `Unknown` when no supply is online, which the notifier reads as
/// "charger unplugged".
pub(crate) fn charger_type_from_supplies<'a, I>(supplies: I) -> ChargerType
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    for (kind, online) in supplies {
        if !online {
            continue;
        }
        match kind {
            "Mains" => return ChargerType::Wall,
            "USB" | "USB_DCP" | "USB_CDP" | "USB_PD" => return ChargerType::Usb,
            "Wireless" => return ChargerType::Variable,
            _ => {}
        }
    }
    ChargerType::Unknown
}
