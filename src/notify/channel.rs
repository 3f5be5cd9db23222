use tokio::sync::mpsc;

use super::{Notification, NotificationSink};

/// Forwards notifications to a receiver, e.g. a UI task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver that drains it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            log::warn!("Notification dropped, receiver closed: {}", e.0.message);
        }
    }
}

impl NotificationSink for ChannelNotifier {
    fn notify_success(&self, message: &str) {
        self.send(Notification::success(message));
    }

    fn notify_failure(&self, message: &str) {
        self.send(Notification::failure(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    #[tokio::test]
    async fn test_notifications_arrive_in_send_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify_success("Uploaded");
        notifier.notify_failure("network down");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.kind, NotificationKind::Success);
        assert_eq!(first.message, "Uploaded");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.kind, NotificationKind::Failure);
        assert_eq!(second.message, "network down");
    }

    #[test]
    fn test_closed_receiver_does_not_panic() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify_failure("nobody listening");
    }
}
