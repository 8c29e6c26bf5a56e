//! HTTP server for the Hostel content server.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Content pages rendered through the resolved host's theme
//! - Per-host static resources stored in the database
//! - JSON admin endpoints for servers, pages, and page content
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use hostel_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8000,
//!         database_path: PathBuf::from("hostel.db"),
//!         default_language: "en".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (hostel-server)
//!                        │
//!                        ├─► /api/* (JSON admin handlers) ──► Store
//!                        │
//!                        ├─► /static/{*path} ──► Store (per-host resources)
//!                        │
//!                        └─► fallback ──► Resolver (host + page + language)
//!                                              │
//!                                              └─► render ──► HTML response
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use hostel_site::Resolver;
use hostel_store::Store;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Language used when a request carries no Accept-Language header.
    pub default_language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_path: PathBuf::from("hostel.db"),
            default_language: "en".to_string(),
        }
    }
}

/// Run the server.
///
/// Opens the database, applies the schema, and refuses to start when
/// the database has no default host to fall back to.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Open the database and make sure the schema exists
    let store = Store::connect(&config.database_path).await?;
    store.init_schema().await?;

    let resolver = Resolver::new(store.clone());
    resolver.verify_default_host().await?;

    // Create app state
    let state = Arc::new(AppState {
        resolver,
        store,
        default_language: config.default_language.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
