//! Notifier runtime setup and orchestration.
//!
//! This module wires together configuration, the platform probe and sinks,
//! the sensor poller, and the event dispatch loop.

use std::{sync::Arc, thread, time::Duration};

use battwatch_bridge::notification::LedSink;
use battwatch_bridge::{MessageFromNotifier, MessageToNotifier};
use battwatch_platform::battery::SysfsBatteryProbe;
use battwatch_platform::led::{LogLedSink, SysfsLedSink};
use battwatch_platform::sensor;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::notifier::{PowerStateNotifier, Tuning};
use crate::sinks::ChannelNotificationSink;

/// Initialize the notifier, start the sensor poller, and process power
/// events.
async fn setup_notifier(
    rx: Receiver<MessageToNotifier>,
    tx: Sender<MessageFromNotifier>,
    sensor_tx: Sender<MessageToNotifier>,
) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");

    let probe = Arc::new(SysfsBatteryProbe::with_default_root(
        &config.battery.supply_name,
    ));
    let led: Box<dyn LedSink + Send> = match &config.led.device {
        Some(device) => Box::new(SysfsLedSink::with_default_root(device)),
        None => Box::new(LogLedSink),
    };

    tokio::spawn(sensor::poll_power_events(
        probe.clone(),
        sensor_tx,
        Duration::from_secs(config.battery.poll_interval_secs),
    ));

    let (alert_tx, alert_rx) = mpsc::channel(8);
    let notifier = PowerStateNotifier::new(
        Box::new(ChannelNotificationSink::new(tx)),
        led,
        probe,
        alert_tx,
        Tuning::from(&config),
    );

    crate::app::consume_power_events(notifier, rx, alert_rx).await;
}

/// Spawn the notifier runtime and begin processing power events.
///
/// `sensor_tx` is the sending side of `rx`; the internal sensor poller feeds
/// its events through the same channel as external collaborators.
pub fn run(
    rx: Receiver<MessageToNotifier>,
    tx: Sender<MessageFromNotifier>,
    sensor_tx: Sender<MessageToNotifier>,
) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_notifier(rx, tx, sensor_tx).await });
    });
}
