//! Task storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Task;

/// Per-user task collections, in insertion order.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Arc<RwLock<HashMap<String, Vec<Task>>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks for a user; empty if the user has none.
    pub async fn list(&self, user_id: &str) -> Vec<Task> {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Look up a single task by id.
    pub async fn get(&self, user_id: &str, task_id: &str) -> Option<Task> {
        self.inner
            .read()
            .await
            .get(user_id)
            .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
            .cloned()
    }

    /// Append a task to its owner's collection, creating it if absent.
    pub async fn insert(&self, task: Task) {
        self.inner
            .write()
            .await
            .entry(task.user_id.clone())
            .or_default()
            .push(task);
    }

    /// Apply `update` to the matching task and return the stored copy.
    /// Returns `None` when the task does not exist.
    pub async fn update(
        &self,
        user_id: &str,
        task_id: &str,
        update: impl FnOnce(&mut Task),
    ) -> Option<Task> {
        let mut map = self.inner.write().await;
        let task = map
            .get_mut(user_id)?
            .iter_mut()
            .find(|t| t.id == task_id)?;
        update(task);
        Some(task.clone())
    }

    /// Remove a task. Returns false when it does not exist.
    pub async fn delete(&self, user_id: &str, task_id: &str) -> bool {
        let mut map = self.inner.write().await;
        match map.get_mut(user_id) {
            Some(tasks) => {
                let before = tasks.len();
                tasks.retain(|t| t.id != task_id);
                tasks.len() < before
            }
            None => false,
        }
    }

    /// Users that currently have tasks; drives the periodic sweep.
    pub async fn user_ids(&self) -> Vec<String> {
        self.inner.read().await.keys().cloned().collect()
    }
}
