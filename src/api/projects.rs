//! Project Routes
//!
//! CRUD operations for the authenticated user's projects. Projects are
//! weak grouping references: deleting one leaves its tasks untouched.
//!
//! Routes:
//! - GET /projects - List the user's projects
//! - POST /projects - Create a project
//! - GET /projects/:id - Get project details
//! - PUT /projects/:id - Update a project
//! - DELETE /projects/:id - Delete a project

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::middleware::AuthUser;
use crate::models::Project;
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a new project.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
}

/// Request to update a project. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all projects for the authenticated user.
///
/// GET /api/projects
async fn list_projects(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Project>>> {
    Ok(Json(state.projects.list(&auth.user_id).await))
}

/// Create a new project.
///
/// POST /api/projects
async fn create_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("project name must not be empty".into()));
    }

    let mut project = Project::new(auth.user_id.clone(), name.to_string(), req.color);
    project.description = req.description;
    project.icon = req.icon;

    state.projects.insert(project.clone()).await;
    info!("created project {} for user {}", project.id, auth.user_id);

    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a single project.
///
/// GET /api/projects/:id
async fn get_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    state
        .projects
        .get(&auth.user_id, &id)
        .await
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("project {}", id)))
}

/// Update a project.
///
/// PUT /api/projects/:id
async fn update_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>> {
    let name = match req.name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(Error::Validation("project name must not be empty".into()));
            }
            Some(name)
        }
        None => None,
    };

    state
        .projects
        .update(&auth.user_id, &id, |project| {
            if let Some(name) = name {
                project.name = name;
            }
            if let Some(description) = req.description {
                project.description = Some(description);
            }
            if let Some(color) = req.color {
                project.color = color;
            }
            if let Some(icon) = req.icon {
                project.icon = Some(icon);
            }
            project.updated_at = Utc::now();
        })
        .await
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("project {}", id)))
}

/// Delete a project.
///
/// DELETE /api/projects/:id
async fn delete_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    if state.projects.delete(&auth.user_id, &id).await {
        info!("deleted project {} for user {}", id, auth.user_id);
        Ok(Json(json!({ "success": true })))
    } else {
        Err(Error::NotFound(format!("project {}", id)))
    }
}
