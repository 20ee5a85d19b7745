//! Reminder generation.
//!
//! Scans a user's tasks and derives notifications for the ones nearing
//! their due date. Generation is additive into the reminder store but
//! idempotent per task: while an unread reminder for a task exists,
//! repeat passes leave it alone unless the due date itself moved.

use chrono::Utc;
use tracing::debug;

use crate::models::{Reminder, Task};
use crate::services::due;
use crate::store::ReminderStore;

/// Derives reminders from task lists and merges them into the store.
///
/// Constructed once by the composition root and shared by the route
/// handlers and the periodic sweeper.
#[derive(Clone)]
pub struct ReminderService {
    reminders: ReminderStore,
}

impl ReminderService {
    pub fn new(reminders: ReminderStore) -> Self {
        Self { reminders }
    }

    /// Scan `tasks` and store reminders for those due within the window.
    ///
    /// Skips tasks with no due date and tasks already done. Returns the
    /// reminders created by this pass.
    pub async fn generate_for_user(&self, user_id: &str, tasks: &[Task]) -> Vec<Reminder> {
        let now = Utc::now();
        let mut fresh = Vec::new();

        for task in tasks {
            if task.status.is_done() {
                continue;
            }
            let due_date = match task.due_date {
                Some(due_date) => due_date,
                None => continue,
            };
            let urgency = match due::classify(due_date, now) {
                Some(urgency) => urgency,
                None => continue,
            };

            // One live reminder per task: an unread entry suppresses
            // regeneration until it is read or cleared, unless the due
            // date moved in the meantime.
            if let Some(existing) = self.reminders.unread_for_task(user_id, &task.id).await {
                if existing.due_date == Some(due_date) {
                    continue;
                }
                self.reminders.remove_unread_for_task(user_id, &task.id).await;
            }

            let message = due::reminder_message(&task.title, urgency);
            fresh.push(Reminder::for_task(task, message, now));
        }

        if !fresh.is_empty() {
            debug!(
                "generated {} reminder(s) for user {}",
                fresh.len(),
                user_id
            );
            self.reminders.append(user_id, fresh.clone()).await;
        }

        fresh
    }
}
