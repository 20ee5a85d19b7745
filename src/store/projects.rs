//! Project storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Project;

/// Per-user project collections, in insertion order.
#[derive(Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<HashMap<String, Vec<Project>>>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All projects for a user; empty if the user has none.
    pub async fn list(&self, user_id: &str) -> Vec<Project> {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn get(&self, user_id: &str, project_id: &str) -> Option<Project> {
        self.inner
            .read()
            .await
            .get(user_id)
            .and_then(|projects| projects.iter().find(|p| p.id == project_id))
            .cloned()
    }

    pub async fn insert(&self, project: Project) {
        self.inner
            .write()
            .await
            .entry(project.user_id.clone())
            .or_default()
            .push(project);
    }

    /// Apply `update` to the matching project and return the stored copy.
    pub async fn update(
        &self,
        user_id: &str,
        project_id: &str,
        update: impl FnOnce(&mut Project),
    ) -> Option<Project> {
        let mut map = self.inner.write().await;
        let project = map
            .get_mut(user_id)?
            .iter_mut()
            .find(|p| p.id == project_id)?;
        update(project);
        Some(project.clone())
    }

    /// Remove a project. Tasks referencing it are left untouched.
    pub async fn delete(&self, user_id: &str, project_id: &str) -> bool {
        let mut map = self.inner.write().await;
        match map.get_mut(user_id) {
            Some(projects) => {
                let before = projects.len();
                projects.retain(|p| p.id != project_id);
                projects.len() < before
            }
            None => false,
        }
    }
}
