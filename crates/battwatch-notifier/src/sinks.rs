//! Channel-backed sink implementation used by the runtime.

use battwatch_bridge::MessageFromNotifier;
use battwatch_bridge::notification::{Banner, NotificationSink};
use tokio::sync::mpsc::Sender;

/// Notification sink that forwards banners over the bridge channel.
///
/// Ids are allocated locally, starting at 1, and travel with the banner so
/// the display surface can honor later close requests. Pushes never block:
/// if the display surface falls behind the send is dropped and logged, which
/// matches the policy that a missing banner is the sink's problem to report.
pub(crate) struct ChannelNotificationSink {
    tx: Sender<MessageFromNotifier>,
    next_id: u32,
}

impl ChannelNotificationSink {
    pub(crate) fn new(tx: Sender<MessageFromNotifier>) -> Self {
        Self { tx, next_id: 0 }
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn display(&mut self, category: &str, body: &str, icon: Option<&str>) -> u32 {
        self.next_id += 1;
        let banner = Banner {
            id: self.next_id,
            category: category.to_string(),
            body: body.to_string(),
            icon: icon.map(str::to_string),
        };
        if let Err(error) = self.tx.try_send(MessageFromNotifier::BannerShown(banner)) {
            log::warn!("Failed to push banner to the display surface: {error}");
        }
        self.next_id
    }

    fn close(&mut self, id: u32) {
        if let Err(error) = self.tx.try_send(MessageFromNotifier::BannerClosed { id }) {
            log::warn!("Failed to push banner close to the display surface: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn ids_are_sequential_and_travel_with_the_banner() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut sink = ChannelNotificationSink::new(tx);

        let first = sink.display("x-nemo.battery", "Charging", Some("icon"));
        let second = sink.display("x-nemo.battery.recharge", "Recharge battery", None);
        assert_eq!((first, second), (1, 2));

        match rx.try_recv().expect("first banner") {
            MessageFromNotifier::BannerShown(banner) => {
                assert_eq!(banner.id, 1);
                assert_eq!(banner.category, "x-nemo.battery");
                assert_eq!(banner.icon.as_deref(), Some("icon"));
            }
            other => panic!("unexpected message {other:?}"),
        }

        sink.close(first);
        rx.try_recv().expect("second banner");
        match rx.try_recv().expect("close message") {
            MessageFromNotifier::BannerClosed { id } => assert_eq!(id, 1),
            other => panic!("unexpected message {other:?}"),
        }
    }
}
