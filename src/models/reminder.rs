//! Reminder model for the notification feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Task;

/// What produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Task,
    System,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Task => "task",
            ReminderKind::System => "system",
        }
    }
}

/// A reminder derived from a task approaching its due date.
///
/// Reminders are ephemeral: they exist only in process memory and are
/// re-derived from the task list, so `title` and `due_date` are
/// denormalized copies that can go stale until the next pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Derived from the source task id plus the generation timestamp.
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Build an unread reminder for `task` with the given message text.
    pub fn for_task(task: &Task, message: String, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("reminder-{}-{}", task.id, now.timestamp_millis()),
            message,
            kind: ReminderKind::Task,
            read: false,
            created_at: now,
            task_id: Some(task.id.clone()),
            user_id: Some(task.user_id.clone()),
            title: Some(task.title.clone()),
            due_date: task.due_date,
        }
    }
}
