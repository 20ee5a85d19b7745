//! Task Routes
//!
//! CRUD operations for the authenticated user's tasks. Creating or
//! updating a task immediately re-derives reminders for it; the
//! periodic sweeper covers everything else.
//!
//! Routes:
//! - GET /tasks - List the user's tasks
//! - POST /tasks - Create a task
//! - GET /tasks/summary - Due-today/overdue counts for the badge
//! - GET /tasks/:id - Get one task
//! - PUT /tasks/:id - Update a task
//! - DELETE /tasks/:id - Delete a task

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::middleware::AuthUser;
use crate::models::{Task, TaskPriority, TaskStatus};
use crate::services::due;
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/summary", get(task_summary))
        .route(
            "/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a task.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Due date as an RFC 3339 string. Unparseable values count as
    /// "no due date" rather than an error.
    pub due_date: Option<String>,
    pub project_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update a task. Absent fields are left unchanged; a due
/// date that is present but unparseable clears the stored one.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
    pub project_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Aggregate counts for the dashboard badge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub due_today: usize,
    pub overdue: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all tasks for the authenticated user.
///
/// GET /api/tasks
async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list(&auth.user_id).await))
}

/// Create a new task.
///
/// POST /api/tasks
///
/// The created task is immediately checked against the reminder window.
#[axum::debug_handler]
async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>)> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(Error::Validation("task title must not be empty".into()));
    }

    let mut task = Task::new(auth.user_id.clone(), title.to_string());
    task.description = req.description;
    task.status = req.status;
    task.priority = req.priority;
    task.due_date = req.due_date.as_deref().and_then(parse_due_date);
    task.project_id = req.project_id;
    task.tags = req.tags;

    state.tasks.insert(task.clone()).await;
    info!("created task {} for user {}", task.id, auth.user_id);

    state
        .reminder_service
        .generate_for_user(&auth.user_id, std::slice::from_ref(&task))
        .await;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Due-today and overdue counts for the notification badge.
///
/// GET /api/tasks/summary
async fn task_summary(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<TaskSummary>> {
    let now = Utc::now();
    let tasks = state.tasks.list(&auth.user_id).await;

    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.status.is_done()).count();
    let due_today = tasks
        .iter()
        .filter(|t| !t.status.is_done())
        .filter(|t| t.due_date.map(|d| due::is_due_today(d, now)).unwrap_or(false))
        .count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.status.is_done())
        .filter(|t| t.due_date.map(|d| due::is_overdue(d, now)).unwrap_or(false))
        .count();

    Ok(Json(TaskSummary {
        total,
        completed,
        due_today,
        overdue,
    }))
}

/// Get a single task.
///
/// GET /api/tasks/:id
async fn get_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Task>> {
    state
        .tasks
        .get(&auth.user_id, &id)
        .await
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("task {}", id)))
}

/// Update a task.
///
/// PUT /api/tasks/:id
///
/// The updated task is re-checked against the reminder window; a moved
/// due date replaces any unread reminder for it.
async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let UpdateTaskRequest {
        title,
        description,
        status,
        priority,
        due_date,
        project_id,
        tags,
    } = req;

    let title = match title {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(Error::Validation("task title must not be empty".into()));
            }
            Some(title)
        }
        None => None,
    };
    // Outer Some means the request set the field; inner None means the
    // value did not parse and the due date is cleared.
    let due_date = due_date.map(|raw| parse_due_date(&raw));

    let updated = state
        .tasks
        .update(&auth.user_id, &id, |task| {
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = Some(description);
            }
            if let Some(status) = status {
                task.status = status;
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if let Some(parsed) = due_date {
                task.due_date = parsed;
            }
            if let Some(project_id) = project_id {
                task.project_id = Some(project_id);
            }
            if let Some(tags) = tags {
                task.tags = tags;
            }
            task.updated_at = Utc::now();
        })
        .await
        .ok_or_else(|| Error::NotFound(format!("task {}", id)))?;

    state
        .reminder_service
        .generate_for_user(&auth.user_id, std::slice::from_ref(&updated))
        .await;

    Ok(Json(updated))
}

/// Delete a task.
///
/// DELETE /api/tasks/:id
async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    if state.tasks.delete(&auth.user_id, &id).await {
        info!("deleted task {} for user {}", id, auth.user_id);
        Ok(Json(json!({ "success": true })))
    } else {
        Err(Error::NotFound(format!("task {}", id)))
    }
}

/// Parse a due date leniently. RFC 3339 values are taken as-is;
/// datetimes without an offset are taken as UTC; anything else counts
/// as unset.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = raw.parse::<DateTime<Utc>>() {
        return Some(parsed);
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    warn!("ignoring unparseable due date: {}", raw);
    None
}
