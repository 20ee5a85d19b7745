//! Configuration management for Stride.
//!
//! Loads configuration from environment variables with defaults
//! suitable for local development.

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub reminder: ReminderConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Bearer token lifetime in seconds.
    pub token_ttl_secs: i64,
}

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Seconds between background sweep passes.
    pub sweep_interval_secs: u64,
    /// Per-user reminder retention cap.
    pub max_per_user: usize,
}

impl Config {
    fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("STRIDE_HOST", "0.0.0.0"),
                port: env_parse("STRIDE_PORT", 3001),
            },
            auth: AuthConfig {
                jwt_secret: env_or("STRIDE_JWT_SECRET", "dev-secret-change-in-production"),
                token_ttl_secs: env_parse("STRIDE_TOKEN_TTL_SECS", 86_400),
            },
            reminder: ReminderConfig {
                sweep_interval_secs: env_parse("STRIDE_SWEEP_INTERVAL_SECS", 3_600),
                max_per_user: env_parse("STRIDE_REMINDER_CAP", 100),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
