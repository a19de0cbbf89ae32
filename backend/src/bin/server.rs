//! Parity HTTP Server Binary
//!
//! This is the main entry point for the Parity REST API server.
//! It loads configuration, creates the in-memory history store, sets up the
//! HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin parity-server
//!
//! # Serve under /api on port 8443
//! API_PREFIX=/api PORT=8443 cargo run --bin parity-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `API_PREFIX`: Prefix in front of `/parity` routes (default: none)
//! - `APP_ENV`: `development` or `production` (default: development)
//! - `CORS_ORIGINS`: Comma separated allowed origins (default: `*`)
//! - `PARITY_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use parity_api::config::ServerConfig;
use parity_api::db;
use parity_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Parity HTTP Server");

    let config = ServerConfig::from_env()?;
    info!(
        environment = %config.environment,
        api_prefix = %config.api_prefix,
        "Configuration loaded"
    );

    let repository = db::create_local_repository();
    info!("History store initialized");

    let state = AppState::new(repository, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    if config.is_development() {
        log_endpoints(&config, &addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_endpoints(config: &ServerConfig, addr: &SocketAddr) {
    let base = format!("http://{}", addr);
    info!("Health check:        GET  {}{}", base, config.route("/health"));
    info!("Check parity:        POST {}{}", base, config.route("/check"));
    info!("Check parity query:  GET  {}{}?number=5", base, config.route("/check-query"));
    info!("History:             GET  {}{}", base, config.route("/history"));
    info!("Statistics:          GET  {}{}", base, config.route("/stats"));
}
