//! Authentication service.
//!
//! Password hashing (argon2) and bearer-token issue/verify (JWT HS256).
//! Everything past the route boundary works with the `AuthUser`
//! extension; token handling never reaches the reminder subsystem.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AuthConfig;
use crate::models::User;
use crate::store::UserStore;
use crate::{Error, Result};

/// JWT claims carried by every bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// Registration, login, and token validation.
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(users: UserStore, config: &AuthConfig) -> Self {
        Self {
            users,
            secret: config.jwt_secret.clone(),
            token_ttl: Duration::seconds(config.token_ttl_secs),
        }
    }

    /// Create a user and hand back a signed token for it.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(User, String)> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(Error::Validation("name and email are required".into()));
        }
        if password.is_empty() {
            return Err(Error::Validation("password is required".into()));
        }
        if self.users.find_by_email(email).await.is_some() {
            return Err(Error::AlreadyExists(format!("user with email {}", email)));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(name.to_string(), email.to_string());
        self.users.insert(user.clone(), password_hash).await;
        info!("registered user {} ({})", user.id, user.email);

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    /// Verify credentials and issue a fresh token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let (user, password_hash) = self
            .users
            .find_by_email(email.trim())
            .await
            .ok_or(Error::InvalidCredentials)?;
        verify_password(password, &password_hash)?;

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    /// Sign a bearer token for `user`.
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| Error::Internal(format!("token signing failed: {}", e)))
    }

    /// Decode and validate a bearer token, including expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| Error::InvalidToken)
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("stored password hash is invalid: {}", e)))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| Error::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthService {
        AuthService::new(
            UserStore::new(),
            &AuthConfig {
                jwt_secret: "test-secret".into(),
                token_ttl_secs: 3600,
            },
        )
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).is_ok());
        assert!(verify_password("hunter3", &hash).is_err());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = auth();
        let (user, token) = auth
            .register("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert!(!token.is_empty());

        let (logged_in, _) = auth.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let auth = auth();
        auth.register("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        let err = auth
            .register("Ada II", "ada@example.com", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let auth = auth();
        auth.register("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        let err = auth.login("ada@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_token_round_trip() {
        let auth = auth();
        let (user, token) = auth
            .register("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let auth = auth();
        let (_, token) = auth
            .register("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(matches!(
            auth.verify_token(&tampered).unwrap_err(),
            Error::InvalidToken
        ));
        assert!(matches!(
            auth.verify_token("not-a-jwt").unwrap_err(),
            Error::InvalidToken
        ));
    }
}
