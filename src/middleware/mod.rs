//! Request middleware.

mod token_auth;

pub use token_auth::{require_auth, AuthUser};
