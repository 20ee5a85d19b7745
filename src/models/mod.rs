//! Data models for Stride.
//!
//! Defines the core types used throughout the system: tasks, projects,
//! users, and the reminders derived from them.

mod project;
mod reminder;
mod task;
mod user;

pub use project::*;
pub use reminder::*;
pub use task::*;
pub use user::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new UUID
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
