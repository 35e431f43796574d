//! The notification menu in the dashboard header.

use crate::models::Notification;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Value of the badge on the bell icon.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        }
    }

    /// Marks everything read and returns how many entries changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        tracing::debug!(changed, "notifications marked read");
        changed
    }
}
