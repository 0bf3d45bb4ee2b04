//! Notifier runtime entry point and public API surface.
//!
//! This crate owns the notifier lifecycle: it loads configuration, wires the
//! platform probe and sinks, and runs the dispatch loop that turns power
//! events into banner notifications and LED patterns.

mod app;
mod banner;
mod config;
mod lowbattery;
mod notifier;
mod runtime;
mod sinks;
mod state;

pub use crate::runtime::run;
