//! Notification store shared across views.
//!
//! Created once by the application and handed to views by `&mut`. Records
//! are kept most-recent-first and never deleted; the only mutation after
//! creation is the read flag going from false to true.

use tracing::{debug, info};

use crate::models::{NewNotification, Notification};
use crate::registry::Outcome;
use crate::seed;

/// Time label given to every notification raised during the session.
pub const JUST_NOW: &str = "Just now";

#[derive(Debug, Default, Clone)]
pub struct NotificationStore {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the startup notifications.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        // Seed list is newest first; push in order to keep it that way.
        for (content, time) in seed::notifications() {
            let id = store.allocate_id();
            store.items.push(Notification {
                id,
                title: content.title,
                message: content.message,
                time: time.to_string(),
                kind: content.kind,
                read: false,
                section: content.section,
            });
        }
        store
    }

    /// Prepend a new unread notification and return its id.
    pub fn add(&mut self, content: NewNotification) -> u64 {
        let id = self.allocate_id();
        info!(id, section = %content.section, title = %content.title, "notification raised");
        self.items.insert(
            0,
            Notification {
                id,
                title: content.title,
                message: content.message,
                time: JUST_NOW.to_string(),
                kind: content.kind,
                read: false,
                section: content.section,
            },
        );
        id
    }

    pub fn mark_read(&mut self, id: u64) -> Outcome {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                Outcome::Applied
            }
            None => {
                debug!(id, "mark_read ignored, no such notification");
                Outcome::Missing
            }
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// All notifications, most recent first.
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self, limit: usize) -> &[Notification] {
        &self.items[..limit.min(self.items.len())]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    fn sample(title: &str) -> NewNotification {
        NewNotification::new(NotificationKind::Info, "physiotherapists", title, "body")
    }

    #[test]
    fn test_add_prepends_unread_just_now() {
        let mut store = NotificationStore::seeded();
        let before = store.len();

        let id = store.add(sample("New Physiotherapist Added"));

        assert_eq!(store.len(), before + 1);
        let first = &store.all()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.time, JUST_NOW);
        assert!(!first.read);
        assert_eq!(first.section, "physiotherapists");
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store = NotificationStore::seeded();
        let a = store.add(sample("a"));
        let b = store.add(sample("b"));
        assert_ne!(a, b);
        assert!(store.all().iter().filter(|n| n.id == a).count() == 1);
    }

    #[test]
    fn test_unread_count_tracks_read_flags() {
        let mut store = NotificationStore::seeded();
        store.add(sample("x"));
        assert_eq!(store.unread_count(), store.all().iter().filter(|n| !n.read).count());
        assert_eq!(store.unread_count(), 3);

        let id = store.all()[1].id;
        assert_eq!(store.mark_read(id), Outcome::Applied);
        assert_eq!(store.unread_count(), 2);

        // Marking again keeps it read.
        assert_eq!(store.mark_read(id), Outcome::Applied);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_missing_is_noop() {
        let mut store = NotificationStore::seeded();
        let snapshot = store.all().to_vec();
        assert_eq!(store.mark_read(9_999), Outcome::Missing);
        assert_eq!(store.all(), snapshot.as_slice());
    }

    #[test]
    fn test_mark_all_read_zeroes_unread() {
        let mut store = NotificationStore::seeded();
        store.add(sample("y"));
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
        assert!(store.all().iter().all(|n| n.read));
    }

    #[test]
    fn test_seed_order_and_latest() {
        let store = NotificationStore::seeded();
        assert_eq!(store.all()[0].title, "New Patient Registration");
        assert_eq!(store.all()[0].time, "2 mins ago");
        assert_eq!(store.latest(1).len(), 1);
        assert_eq!(store.latest(10).len(), store.len());
    }
}
