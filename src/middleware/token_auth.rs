//! Bearer-token authentication middleware.
//!
//! Validates `Authorization: Bearer {token}` headers and injects the
//! authenticated identity into request extensions. A missing token is
//! a 401; a token that fails validation is a 403.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::Error, AppState};

/// Authenticated identity injected after successful token validation.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

/// Extract the bearer token from the Authorization header.
fn extract_bearer(req: &Request<Body>) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(|token| token.to_string())
}

/// Middleware that requires a valid bearer token.
///
/// # Errors
///
/// Returns 401 Unauthorized when no bearer token is present, and
/// 403 Forbidden when the token fails signature or expiry validation.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    let token = extract_bearer(&req).ok_or(Error::Unauthenticated)?;

    let claims = state.auth.verify_token(&token)?;

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}
