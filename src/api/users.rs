//! User Routes
//!
//! Routes:
//! - GET /users/me - The authenticated user

use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::middleware::AuthUser;
use crate::models::User;
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// GET /api/users/me
async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<User>> {
    let user = state
        .users
        .get(&auth.user_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("user {}", auth.user_id)))?;
    Ok(Json(user))
}
