//! Periodic reminder sweep.
//!
//! Re-runs the generator over every user's current task snapshot on a
//! fixed interval, mirroring what task mutations trigger on demand.
//! The sweep is not cancellable and has no backpressure: a pass runs
//! independently of in-flight requests and holds no lock across users.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::services::ReminderService;
use crate::store::TaskStore;

/// Background task that periodically re-derives reminders.
pub struct ReminderSweeper {
    tasks: TaskStore,
    reminders: ReminderService,
    interval: Duration,
}

impl ReminderSweeper {
    pub fn new(tasks: TaskStore, reminders: ReminderService, interval: Duration) -> Self {
        Self {
            tasks,
            reminders,
            interval,
        }
    }

    /// Spawn the background loop for the lifetime of the process.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick of a tokio interval completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.sweep().await;
            }
        })
    }

    /// One pass over every user that currently has tasks.
    pub async fn sweep(&self) {
        let user_ids = self.tasks.user_ids().await;
        debug!("reminder sweep over {} user(s)", user_ids.len());
        for user_id in user_ids {
            let tasks = self.tasks.list(&user_id).await;
            self.reminders.generate_for_user(&user_id, &tasks).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::store::ReminderStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_sweep_generates_for_all_users() {
        let tasks = TaskStore::new();
        let reminders = ReminderStore::default();
        let service = ReminderService::new(reminders.clone());

        for user in ["a", "b"] {
            let mut task = Task::new(user.into(), "Report".into());
            task.due_date = Some(Utc::now() + chrono::Duration::hours(2));
            tasks.insert(task).await;
        }

        let sweeper = ReminderSweeper::new(tasks, service, Duration::from_secs(3600));
        sweeper.sweep().await;

        assert_eq!(reminders.list("a").await.len(), 1);
        assert_eq!(reminders.list("b").await.len(), 1);

        // A second pass over unchanged tasks adds nothing.
        sweeper.sweep().await;
        assert_eq!(reminders.list("a").await.len(), 1);
    }
}
