use std::sync::Mutex;

use super::{Notification, NotificationKind, NotificationSink};

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.notifications.lock() {
            Ok(list) => list.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages of the given kind, in the order they were recorded.
    pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notifications().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, notification: Notification) {
        match self.notifications.lock() {
            Ok(mut list) => list.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.push(Notification::success(message));
    }

    fn notify_failure(&self, message: &str) {
        self.push(Notification::failure(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_each_call() {
        let notifier = RecordingNotifier::new();
        assert!(notifier.is_empty());

        notifier.notify_success("Uploaded");
        notifier.notify_success("Uploaded");
        notifier.notify_failure("boom");

        assert_eq!(notifier.len(), 3);
        assert_eq!(notifier.messages(NotificationKind::Success), vec!["Uploaded", "Uploaded"]);
        assert_eq!(notifier.messages(NotificationKind::Failure), vec!["boom"]);
    }
}
