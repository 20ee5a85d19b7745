//! User storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::User;

/// A user plus the credential material that must never be serialized.
#[derive(Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// Registered users keyed by id.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User, password_hash: String) {
        self.inner.write().await.insert(
            user.id.clone(),
            UserRecord {
                user,
                password_hash,
            },
        );
    }

    pub async fn get(&self, user_id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .get(user_id)
            .map(|record| record.user.clone())
    }

    /// Look up a user and their password hash by email.
    pub async fn find_by_email(&self, email: &str) -> Option<(User, String)> {
        self.inner
            .read()
            .await
            .values()
            .find(|record| record.user.email == email)
            .map(|record| (record.user.clone(), record.password_hash.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = UserStore::new();
        let user = User::new("Ada".into(), "ada@example.com".into());
        let id = user.id.clone();
        store.insert(user, "hash".into()).await;

        assert!(store.get(&id).await.is_some());
        assert!(store.get("missing").await.is_none());

        let (found, hash) = store.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found.id, id);
        assert_eq!(hash, "hash");
        assert!(store.find_by_email("bob@example.com").await.is_none());
    }
}
