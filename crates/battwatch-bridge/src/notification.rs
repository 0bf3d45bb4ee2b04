/// LED pattern indicating active charging.
pub const PATTERN_BATTERY_CHARGING: &str = "PatternBatteryCharging";

/// LED pattern indicating a fully charged battery.
pub const PATTERN_BATTERY_FULL: &str = "PatternBatteryFull";

/// A banner notification as displayed to the user.
///
/// Produced by the notifier when it raises a banner through its notification
/// sink; the display surface renders it and keeps it addressable by `id` so a
/// later close request can retract it.
#[derive(Debug, Clone)]
pub struct Banner {
    /// Identifier assigned by the notification sink, unique per process.
    pub id: u32,
    /// Category tag used for grouping and targeted retraction
    /// (e.g. `x-nemo.battery.chargingcomplete`).
    pub category: String,
    /// The text content to display to the user.
    pub body: String,
    /// Optional icon resource name accompanying the banner.
    pub icon: Option<String>,
}

/// Sink through which the notifier raises and retracts banners.
///
/// The notifier keeps at most one banner outstanding at a time; it never
/// inspects failures beyond the returned id, so implementations report their
/// own errors (an absent banner is the only user-visible symptom).
pub trait NotificationSink {
    /// Display a banner and return the id it can later be closed under.
    fn display(&mut self, category: &str, body: &str, icon: Option<&str>) -> u32;

    /// Retract a previously displayed banner.
    fn close(&mut self, id: u32);
}

/// Sink controlling indicator LED patterns.
///
/// Both operations are idempotent and fire-and-forget.
pub trait LedSink {
    /// Activate the named LED pattern.
    fn activate(&self, pattern: &str);

    /// Deactivate the named LED pattern.
    fn deactivate(&self, pattern: &str);
}
