//! In-memory storage for Stride.
//!
//! The prototype keeps all state in per-user maps for the lifetime of
//! the process; a restart discards everything. Handlers and the
//! background sweep share the maps through `tokio::sync::RwLock`, but
//! the runtime model is effectively single-writer: each mutation runs
//! to completion inside one handler or one sweep pass.

mod projects;
mod reminders;
mod tasks;
mod users;

pub use projects::ProjectStore;
pub use reminders::ReminderStore;
pub use tasks::TaskStore;
pub use users::UserStore;
