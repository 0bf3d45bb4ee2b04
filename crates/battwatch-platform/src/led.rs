//! Indicator LED control through `/sys/class/leds`.

use std::fs;
use std::path::PathBuf;

use battwatch_bridge::notification::{LedSink, PATTERN_BATTERY_CHARGING, PATTERN_BATTERY_FULL};

/// LED sink writing trigger/brightness files of a single LED device.
///
/// Pattern activation is idempotent and fire-and-forget: write errors are
/// logged and otherwise ignored.
pub struct SysfsLedSink {
    device_dir: PathBuf,
}

impl SysfsLedSink {
    /// Creates a sink for the named device under the given LED class root.
    pub fn new(class_dir: impl Into<PathBuf>, device: &str) -> Self {
        Self {
            device_dir: class_dir.into().join(device),
        }
    }

    /// Creates a sink for the standard `/sys/class/leds` location.
    pub fn with_default_root(device: &str) -> Self {
        Self::new("/sys/class/leds", device)
    }

    fn write(&self, file: &str, value: &str) {
        let path = self.device_dir.join(file);
        if let Err(error) = fs::write(&path, value) {
            log::warn!("Failed to write {value:?} to {path:?}: {error}");
        }
    }
}

impl LedSink for SysfsLedSink {
    fn activate(&self, pattern: &str) {
        let Some(trigger) = trigger_for_pattern(pattern) else {
            log::warn!("Unknown LED pattern {pattern:?}, ignoring");
            return;
        };
        self.write("trigger", trigger);
        self.write("brightness", "1");
    }

    fn deactivate(&self, _pattern: &str) {
        // Patterns share one physical LED, so deactivation always clears it.
        self.write("trigger", "none");
        self.write("brightness", "0");
    }
}

/// Maps an abstract pattern name onto a kernel LED trigger.
pub(crate) fn trigger_for_pattern(pattern: &str) -> Option<&'static str> {
    match pattern {
        PATTERN_BATTERY_CHARGING => Some("timer"),
        PATTERN_BATTERY_FULL => Some("default-on"),
        _ => None,
    }
}

/// Fallback LED sink that only logs pattern changes.
///
/// Used when no LED device is configured, keeping the notifier's LED calls
/// observable on headless setups.
pub struct LogLedSink;

impl LedSink for LogLedSink {
    fn activate(&self, pattern: &str) {
        log::info!("LED pattern activated: {pattern}");
    }

    fn deactivate(&self, pattern: &str) {
        log::info!("LED pattern deactivated: {pattern}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_patterns_map_to_triggers() {
        assert_eq!(trigger_for_pattern(PATTERN_BATTERY_CHARGING), Some("timer"));
        assert_eq!(
            trigger_for_pattern(PATTERN_BATTERY_FULL),
            Some("default-on")
        );
        assert_eq!(trigger_for_pattern("PatternCommunication"), None);
    }

    #[test]
    fn missing_device_is_tolerated() {
        let sink = SysfsLedSink::new("/nonexistent/leds", "battery");
        // Must not panic; errors are logged only.
        sink.activate(PATTERN_BATTERY_CHARGING);
        sink.deactivate(PATTERN_BATTERY_CHARGING);
    }
}
