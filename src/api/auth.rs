//! Authentication Routes
//!
//! Public registration and login. Both return a bearer token plus the
//! created/authenticated user.
//!
//! Routes:
//! - POST /auth/register - Create an account
//! - POST /auth/login - Exchange credentials for a token

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::{AppState, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token plus user payload returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ============================================================================
// Handlers
// ============================================================================

/// Register a new account.
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state
        .auth
        .register(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(AuthResponse { token, user }))
}

/// Exchange credentials for a bearer token.
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(AuthResponse { token, user }))
}
