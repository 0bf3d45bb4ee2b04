//! Linux platform collaborators for the power-state notifier.
//!
//! This crate realizes the external sensor and device seams against sysfs:
//! a battery probe over `/sys/class/power_supply`, a poll loop that diffs
//! probe snapshots into power events, and an LED sink over `/sys/class/leds`.

pub mod battery;
pub mod led;
pub mod sensor;
