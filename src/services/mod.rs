//! Service layer for Stride.
//!
//! Contains business logic between the HTTP surface and the stores:
//! - Auth (credentials and bearer tokens)
//! - Due (due-date classification)
//! - Reminder (notification derivation)
//! - Sweeper (periodic background re-scan)

mod auth;
pub mod due;
mod reminder;
mod sweeper;

pub use auth::{AuthService, Claims};
pub use reminder::ReminderService;
pub use sweeper::ReminderSweeper;
