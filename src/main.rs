use battwatch_bridge::MessageFromNotifier;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let channels = battwatch_bridge::BridgeChannels::default();
    battwatch_notifier::run(
        channels.notifier_rx,
        channels.notifier_tx,
        channels.frontend_tx,
    );

    // Headless display surface: render notifier banners into the log.
    let mut rx = channels.frontend_rx;
    while let Some(message) = rx.blocking_recv() {
        match message {
            MessageFromNotifier::BannerShown(banner) => match &banner.icon {
                Some(icon) => log::info!(
                    "[{}] {} (icon {icon}, id {})",
                    banner.category,
                    banner.body,
                    banner.id
                ),
                None => log::info!("[{}] {} (id {})", banner.category, banner.body, banner.id),
            },
            MessageFromNotifier::BannerClosed { id } => log::info!("Banner {id} closed"),
        }
    }
}
