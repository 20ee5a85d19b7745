//! Stride - Task Management Server
//!
//! A task and project CRUD backend over in-memory state, with
//! due-date reminder derivation on task mutation and on a periodic
//! background sweep.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod middleware;
mod models;
mod services;
mod state;
mod store;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::init();
    tracing::info!(
        "Starting Stride server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Initialize application state
    let state = AppState::new();
    tracing::info!("Application state initialized");

    // Start the periodic reminder sweep
    let sweeper = services::ReminderSweeper::new(
        state.tasks.clone(),
        state.reminder_service.clone(),
        Duration::from_secs(config.reminder.sweep_interval_secs),
    );
    let _sweeper_handle = sweeper.start();
    tracing::info!(
        "Reminder sweeper started (every {}s)",
        config.reminder.sweep_interval_secs
    );

    // Build router
    let app = Router::new()
        .merge(api::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid address");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
