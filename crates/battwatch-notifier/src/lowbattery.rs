//! Repeated low-battery alerting on its own cadence.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Owned helper that keeps nagging the user while the battery stays low.
///
/// Alerts are not dispatched here: they are looped back into the notifier's
/// event queue through the alert channel, so all banner side effects stay on
/// the single dispatch path. Dropping the handle aborts the repeat task; an
/// alert already in flight at that point is ignored by the notifier.
pub(crate) struct LowBatteryNotifier {
    alert_tx: mpsc::Sender<()>,
    interval_tx: watch::Sender<Duration>,
    unlocked_interval: Duration,
    locked_interval: Duration,
    task: JoinHandle<()>,
}

impl LowBatteryNotifier {
    /// Starts the repeat task. The first alert is the caller's to send (see
    /// [`LowBatteryNotifier::send_alert`]); the task only produces the
    /// follow-ups.
    pub(crate) fn start(
        alert_tx: mpsc::Sender<()>,
        unlocked_interval: Duration,
        locked_interval: Duration,
        screen_lock_active: bool,
    ) -> Self {
        let initial = if screen_lock_active {
            locked_interval
        } else {
            unlocked_interval
        };
        let (interval_tx, mut interval_rx) = watch::channel(initial);

        let repeat_tx = alert_tx.clone();
        let task = tokio::spawn(async move {
            loop {
                let pause = *interval_rx.borrow_and_update();
                tokio::select! {
                    _ = tokio::time::sleep(pause) => {
                        if repeat_tx.send(()).await.is_err() {
                            break;
                        }
                    }
                    changed = interval_rx.changed() => {
                        // Cadence changed mid-sleep; restart with the new
                        // interval.
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            alert_tx,
            interval_tx,
            unlocked_interval,
            locked_interval,
            task,
        }
    }

    /// Queues an immediate alert.
    pub(crate) fn send_alert(&self) {
        if self.alert_tx.try_send(()).is_err() {
            log::warn!("Low battery alert channel full, dropping alert");
        }
    }

    /// Switches the repeat cadence between the locked and unlocked intervals.
    /// Re-applying the current state is a no-op.
    pub(crate) fn set_screen_lock_active(&self, active: bool) {
        let interval = if active {
            self.locked_interval
        } else {
            self.unlocked_interval
        };
        self.interval_tx.send_if_modified(|current| {
            if *current == interval {
                false
            } else {
                *current = interval;
                true
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn current_interval(&self) -> Duration {
        *self.interval_tx.borrow()
    }
}

impl Drop for LowBatteryNotifier {
    fn drop(&mut self) {
        self.task.abort();
    }
}
