//! Project model for grouping tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owned by a single user.
///
/// Tasks reference projects weakly; nothing cascades on delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color, e.g. "#6366f1".
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with generated ID
    pub fn new(user_id: String, name: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id: super::new_id(),
            name,
            description: None,
            color,
            icon: None,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
