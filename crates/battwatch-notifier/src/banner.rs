//! Banner kinds and their fixed category/body/icon triples.

pub(crate) const CATEGORY_BATTERY: &str = "x-nemo.battery";
pub(crate) const CATEGORY_CHARGING_COMPLETE: &str = "x-nemo.battery.chargingcomplete";
pub(crate) const CATEGORY_REMOVE_CHARGER: &str = "x-nemo.battery.removecharger";
pub(crate) const CATEGORY_CHARGING_NOT_STARTED: &str = "x-nemo.battery.chargingnotstarted";
pub(crate) const CATEGORY_RECHARGE: &str = "x-nemo.battery.recharge";
pub(crate) const CATEGORY_ENTER_PSM: &str = "x-nemo.battery.enterpsm";
pub(crate) const CATEGORY_EXIT_PSM: &str = "x-nemo.battery.exitpsm";
pub(crate) const CATEGORY_LOW_BATTERY: &str = "x-nemo.battery.lowbattery";
pub(crate) const CATEGORY_INSUFFICIENT_POWER: &str = "x-nemo.battery.notenoughpower";

/// Icon attached to a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconHint {
    /// No icon.
    None,
    /// Charge-level icon selected from the current battery percentage.
    ChargeLevel,
    /// Fixed icon resource.
    Fixed(&'static str),
}

/// The distinct banners the notifier can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BannerKind {
    Charging,
    ChargingComplete,
    RemoveCharger,
    ChargingNotStarted,
    RechargeBattery,
    EnteringPowerSave,
    ExitingPowerSave,
    LowBattery,
    InsufficientPower,
}

impl BannerKind {
    /// Category tag the banner is displayed (and later retracted) under.
    pub(crate) fn category(self) -> &'static str {
        match self {
            Self::Charging => CATEGORY_BATTERY,
            Self::ChargingComplete => CATEGORY_CHARGING_COMPLETE,
            Self::RemoveCharger => CATEGORY_REMOVE_CHARGER,
            Self::ChargingNotStarted => CATEGORY_CHARGING_NOT_STARTED,
            Self::RechargeBattery => CATEGORY_RECHARGE,
            Self::EnteringPowerSave => CATEGORY_ENTER_PSM,
            Self::ExitingPowerSave => CATEGORY_EXIT_PSM,
            Self::LowBattery => CATEGORY_LOW_BATTERY,
            Self::InsufficientPower => CATEGORY_INSUFFICIENT_POWER,
        }
    }

    /// User-visible banner text.
    pub(crate) fn body(self) -> &'static str {
        match self {
            Self::Charging => "Charging",
            Self::ChargingComplete => "Charging complete",
            Self::RemoveCharger => "Disconnect charger from power supply to save energy",
            Self::ChargingNotStarted => "Charging not started. Replace charger.",
            Self::RechargeBattery => "Recharge battery",
            Self::EnteringPowerSave => "Entering power save mode",
            Self::ExitingPowerSave => "Exiting power save mode",
            Self::LowBattery => "Low battery",
            Self::InsufficientPower => "Not enough power to charge",
        }
    }

    /// Icon accompanying the banner.
    pub(crate) fn icon(self) -> IconHint {
        match self {
            Self::Charging | Self::EnteringPowerSave | Self::ExitingPowerSave => {
                IconHint::ChargeLevel
            }
            Self::InsufficientPower => {
                IconHint::Fixed("icon-m-energy-management-insufficient-power")
            }
            _ => IconHint::None,
        }
    }
}

/// Selects one of 9 charge-level icons for the given battery percentage.
///
/// Bucket boundaries are inclusive-low at 84/73/62/51/39/28/17/5 percent.
pub(crate) fn charge_level_icon(percent: i32) -> &'static str {
    if percent >= 84 {
        "icon-m-energy-management-charging8"
    } else if percent >= 73 {
        "icon-m-energy-management-charging7"
    } else if percent >= 62 {
        "icon-m-energy-management-charging6"
    } else if percent >= 51 {
        "icon-m-energy-management-charging5"
    } else if percent >= 39 {
        "icon-m-energy-management-charging4"
    } else if percent >= 28 {
        "icon-m-energy-management-charging3"
    } else if percent >= 17 {
        "icon-m-energy-management-charging2"
    } else if percent >= 5 {
        "icon-m-energy-management-charging1"
    } else {
        "icon-m-energy-management-charging-low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_rank(icon: &str) -> u8 {
        match icon {
            "icon-m-energy-management-charging-low" => 0,
            "icon-m-energy-management-charging1" => 1,
            "icon-m-energy-management-charging2" => 2,
            "icon-m-energy-management-charging3" => 3,
            "icon-m-energy-management-charging4" => 4,
            "icon-m-energy-management-charging5" => 5,
            "icon-m-energy-management-charging6" => 6,
            "icon-m-energy-management-charging7" => 7,
            "icon-m-energy-management-charging8" => 8,
            other => panic!("unexpected icon {other}"),
        }
    }

    #[test]
    fn every_percentage_maps_to_exactly_one_bucket() {
        let mut previous_rank = 0;
        for percent in 0..=100 {
            let rank = bucket_rank(charge_level_icon(percent));
            assert!(rank >= previous_rank, "bucket rank regressed at {percent}%");
            previous_rank = rank;
        }
        assert_eq!(previous_rank, 8);
    }

    #[test]
    fn bucket_boundaries_are_inclusive_low() {
        for (percent, rank) in [
            (0, 0),
            (4, 0),
            (5, 1),
            (16, 1),
            (17, 2),
            (27, 2),
            (28, 3),
            (38, 3),
            (39, 4),
            (50, 4),
            (51, 5),
            (61, 5),
            (62, 6),
            (72, 6),
            (73, 7),
            (83, 7),
            (84, 8),
            (100, 8),
        ] {
            assert_eq!(
                bucket_rank(charge_level_icon(percent)),
                rank,
                "wrong bucket at {percent}%"
            );
        }
    }

    #[test]
    fn triples_are_fixed_per_kind() {
        assert_eq!(BannerKind::Charging.category(), CATEGORY_BATTERY);
        assert_eq!(BannerKind::Charging.icon(), IconHint::ChargeLevel);
        assert_eq!(BannerKind::LowBattery.category(), CATEGORY_LOW_BATTERY);
        assert_eq!(BannerKind::LowBattery.icon(), IconHint::None);
        assert_eq!(
            BannerKind::InsufficientPower.icon(),
            IconHint::Fixed("icon-m-energy-management-insufficient-power")
        );
        assert_eq!(
            BannerKind::RemoveCharger.body(),
            "Disconnect charger from power supply to save energy"
        );
    }
}
