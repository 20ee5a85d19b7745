//! Application state for Stride.
//!
//! Contains the shared state that is passed to all handlers. Every
//! store and service is constructed here and injected explicitly;
//! nothing lives in module-level globals.

use crate::config;
use crate::services::{AuthService, ReminderService};
use crate::store::{ProjectStore, ReminderStore, TaskStore, UserStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered users and their credentials.
    pub users: UserStore,
    /// Per-user task collections.
    pub tasks: TaskStore,
    /// Per-user project collections.
    pub projects: ProjectStore,
    /// Generated reminders backing the notification endpoints.
    pub reminders: ReminderStore,
    /// Reminder derivation service.
    pub reminder_service: ReminderService,
    /// Authentication service.
    pub auth: AuthService,
}

impl AppState {
    /// Create a new application state, initializing all stores and services.
    pub fn new() -> Self {
        let config = config::config();

        let users = UserStore::new();
        let tasks = TaskStore::new();
        let projects = ProjectStore::new();
        let reminders = ReminderStore::new(config.reminder.max_per_user);

        let reminder_service = ReminderService::new(reminders.clone());
        let auth = AuthService::new(users.clone(), &config.auth);

        Self {
            users,
            tasks,
            projects,
            reminders,
            reminder_service,
            auth,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
