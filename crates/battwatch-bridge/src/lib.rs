//! Shared power-event and notification protocol.
//!
//! This crate defines the types and contracts used to connect the sensor
//! layer, the power-state notifier, and the display surface that renders
//! banner notifications.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The sensor layer sends power events (charging state, battery status,
//!   charger type, power save mode) plus the screen lock flag.
//! - The notifier pushes display commands (banner shown, banner closed).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod notification;
pub mod power;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Events delivered to the notifier.
///
/// The four power variants are transient sensor signals, produced externally
/// and consumed exactly once; unknown or out-of-range values inside them are
/// legal no-op branches for the notifier, never errors.
#[derive(Debug, Clone)]
pub enum MessageToNotifier {
    /// The battery started or stopped charging.
    ChargingStateChanged(power::ChargingState),
    /// The coarse battery status crossed a classification boundary.
    BatteryStatusChanged(power::BatteryStatus),
    /// A charger was attached, detached, or re-classified.
    ChargerTypeChanged(power::ChargerType),
    /// Device-wide power save mode was toggled.
    PowerSaveModeChanged(power::PowerSaveMode),
    /// The screen lock engaged or released.
    ScreenLockChanged(bool),
}

/// Display commands emitted by the notifier.
#[derive(Debug, Clone)]
pub enum MessageFromNotifier {
    /// A banner notification was raised and should be rendered.
    BannerShown(notification::Banner),
    /// A previously raised banner should be retracted.
    BannerClosed {
        /// Identifier the banner was shown under.
        id: u32,
    },
}

/// Paired `tokio::mpsc` channels connecting the sensor/display side with the
/// notifier.
pub struct BridgeChannels {
    /// Receiver used by the display surface to get commands from the notifier.
    pub frontend_rx: Receiver<MessageFromNotifier>,
    /// Sender used by the sensor layer to deliver power events.
    pub frontend_tx: Sender<MessageToNotifier>,

    /// Receiver used by the notifier to get power events.
    pub notifier_rx: Receiver<MessageToNotifier>,
    /// Sender used by the notifier to push display commands.
    pub notifier_tx: Sender<MessageFromNotifier>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_notifier_tx, to_notifier_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_notifier_tx,
            frontend_rx: to_frontend_rx,
            notifier_rx: to_notifier_rx,
            notifier_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
