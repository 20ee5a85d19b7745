//! Reminder storage.
//!
//! Per-user collections backing the notification feed. Growth is
//! bounded by a per-user retention cap; once a collection exceeds it
//! the oldest entries are evicted first.
//!
//! Per-reminder state machine: Unread -> (mark_read) -> Read ->
//! (clear) -> removed. Nothing here ever resets a reminder to unread.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Reminder;

/// Default per-user retention cap.
pub const DEFAULT_MAX_PER_USER: usize = 100;

/// Per-user reminder collections with bounded retention.
#[derive(Clone)]
pub struct ReminderStore {
    inner: Arc<RwLock<HashMap<String, Vec<Reminder>>>>,
    max_per_user: usize,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_USER)
    }
}

impl ReminderStore {
    pub fn new(max_per_user: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_per_user: max_per_user.max(1),
        }
    }

    /// Merge new reminders onto the user's list, creating it if absent.
    pub async fn append(&self, user_id: &str, reminders: Vec<Reminder>) {
        if reminders.is_empty() {
            return;
        }
        let mut map = self.inner.write().await;
        let list = map.entry(user_id.to_string()).or_default();
        list.extend(reminders);
        if list.len() > self.max_per_user {
            let excess = list.len() - self.max_per_user;
            list.drain(..excess);
        }
    }

    /// Snapshot of the user's reminders; empty if none exist. Never fails.
    pub async fn list(&self, user_id: &str) -> Vec<Reminder> {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Set read=true on the matching reminder. Unknown ids are a no-op.
    pub async fn mark_read(&self, user_id: &str, reminder_id: &str) {
        if let Some(list) = self.inner.write().await.get_mut(user_id) {
            if let Some(reminder) = list.iter_mut().find(|r| r.id == reminder_id) {
                reminder.read = true;
            }
        }
    }

    /// Drop the user's entire collection. A no-op if there is none.
    pub async fn clear(&self, user_id: &str) {
        self.inner.write().await.remove(user_id);
    }

    /// The unread reminder currently tracking `task_id`, if any.
    pub async fn unread_for_task(&self, user_id: &str, task_id: &str) -> Option<Reminder> {
        self.inner
            .read()
            .await
            .get(user_id)
            .and_then(|list| {
                list.iter()
                    .find(|r| !r.read && r.task_id.as_deref() == Some(task_id))
            })
            .cloned()
    }

    /// Remove unread reminders tracking `task_id`; read entries stay.
    pub async fn remove_unread_for_task(&self, user_id: &str, task_id: &str) {
        if let Some(list) = self.inner.write().await.get_mut(user_id) {
            list.retain(|r| r.read || r.task_id.as_deref() != Some(task_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use chrono::Utc;

    fn reminder_for(task_id: &str) -> Reminder {
        let mut task = Task::new("user-1".into(), "Report".into());
        task.id = task_id.to_string();
        Reminder::for_task(&task, "msg".into(), Utc::now())
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let store = ReminderStore::default();
        assert!(store.list("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let store = ReminderStore::default();
        store.append("user-1", vec![reminder_for("t1")]).await;
        store.append("user-1", vec![reminder_for("t2")]).await;
        assert_eq!(store.list("user-1").await.len(), 2);
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id_is_noop() {
        let store = ReminderStore::default();
        store.append("user-1", vec![reminder_for("t1")]).await;

        store.mark_read("user-1", "missing").await;

        let list = store.list("user-1").await;
        assert_eq!(list.len(), 1);
        assert!(!list[0].read);
    }

    #[tokio::test]
    async fn test_mark_read() {
        let store = ReminderStore::default();
        store.append("user-1", vec![reminder_for("t1")]).await;
        let id = store.list("user-1").await[0].id.clone();

        store.mark_read("user-1", &id).await;
        assert!(store.list("user-1").await[0].read);

        // Marking again stays read; there is no way back to unread.
        store.mark_read("user-1", &id).await;
        assert!(store.list("user-1").await[0].read);
    }

    #[tokio::test]
    async fn test_clear_without_collection_is_noop() {
        let store = ReminderStore::default();
        store.clear("user-1").await;
        assert!(store.list("user-1").await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = ReminderStore::default();
        store
            .append("user-1", vec![reminder_for("t1"), reminder_for("t2")])
            .await;
        store.clear("user-1").await;
        assert!(store.list("user-1").await.is_empty());
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_first() {
        let store = ReminderStore::new(3);
        for i in 0..5 {
            store
                .append("user-1", vec![reminder_for(&format!("t{}", i))])
                .await;
        }

        let list = store.list("user-1").await;
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].task_id.as_deref(), Some("t2"));
        assert_eq!(list[2].task_id.as_deref(), Some("t4"));
    }

    #[tokio::test]
    async fn test_unread_for_task() {
        let store = ReminderStore::default();
        store.append("user-1", vec![reminder_for("t1")]).await;

        let found = store.unread_for_task("user-1", "t1").await;
        assert!(found.is_some());

        let id = found.unwrap().id;
        store.mark_read("user-1", &id).await;
        assert!(store.unread_for_task("user-1", "t1").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_unread_for_task_keeps_read_entries() {
        let store = ReminderStore::default();
        store.append("user-1", vec![reminder_for("t1")]).await;
        let read_id = store.list("user-1").await[0].id.clone();
        store.mark_read("user-1", &read_id).await;
        store.append("user-1", vec![reminder_for("t1")]).await;

        store.remove_unread_for_task("user-1", "t1").await;

        let list = store.list("user-1").await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, read_id);
    }
}
