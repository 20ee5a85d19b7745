//! API Routes for Stride
//!
//! This module combines all API routes into a single router.
//! Routes are organized by domain and apply appropriate middleware.

mod auth;
mod notifications;
mod projects;
mod status;
mod tasks;
mod users;

use axum::Router;

use crate::middleware::require_auth;
use crate::AppState;

/// Build the complete API router.
///
/// Route structure:
/// - /health - Health check (public)
/// - /api/auth/* - Registration and login (public)
/// - /api/users/* - Current-user info (token-protected)
/// - /api/tasks/* - Task CRUD (token-protected)
/// - /api/projects/* - Project CRUD (token-protected)
/// - /api/notifications/* - Reminder feed (token-protected)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health endpoint (public)
        .merge(status::routes())
        // Authentication routes (public)
        .nest("/api/auth", auth::routes())
        // Protected API routes
        .nest("/api", protected_routes(state))
}

/// Protected routes that require authentication.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", users::routes())
        .nest("/tasks", tasks::routes())
        .nest("/projects", projects::routes())
        .merge(notifications::routes())
        // Apply token authentication to all protected routes
        .layer(axum::middleware::from_fn_with_state(state, require_auth))
}
