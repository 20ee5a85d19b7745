//! User model.
//!
//! Password hashes live in the user store, not on this struct, so a
//! serialized `User` can never leak credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: super::new_id(),
            name,
            email,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }
}
