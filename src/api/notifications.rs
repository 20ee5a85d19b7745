//! Notification Routes
//!
//! The read side of the reminder subsystem. Reminders are derived from
//! tasks by the generator; these routes only expose the per-user store.
//!
//! Routes:
//! - GET /notifications - The user's reminders
//! - POST /notifications/:id/read - Mark one reminder read
//! - DELETE /notifications - Clear all reminders

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use crate::middleware::AuthUser;
use crate::models::Reminder;
use crate::{AppState, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).delete(clear_notifications),
        )
        .route("/notifications/:id/read", post(mark_read))
}

/// List the authenticated user's reminders.
///
/// GET /api/notifications
async fn list_notifications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Reminder>>> {
    Ok(Json(state.reminders.list(&auth.user_id).await))
}

/// Mark one reminder as read.
///
/// POST /api/notifications/:id/read
///
/// Marking an unknown id is a no-op, not an error.
async fn mark_read(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.reminders.mark_read(&auth.user_id, &id).await;
    Ok(Json(json!({ "success": true })))
}

/// Clear all of the user's reminders.
///
/// DELETE /api/notifications
async fn clear_notifications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Value>> {
    state.reminders.clear(&auth.user_id).await;
    Ok(Json(json!({ "success": true })))
}
