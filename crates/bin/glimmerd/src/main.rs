//! # glimmerd — glimmer daemon
//!
//! Composition root that wires the driver, service, and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize `tracing` logging
//! - Construct the light driver (virtual, standing in for hardware)
//! - Construct the application service, injecting the driver via its port
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use glimmer_adapter_http_axum::router;
use glimmer_adapter_http_axum::state::AppState;
use glimmer_adapter_virtual::VirtualLight;
use glimmer_app::services::light_service::LightService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let driver = VirtualLight::default();
    let light_service = LightService::new(driver);

    let state = AppState::new(light_service);
    let app = router::build(state, config.panel.dir.clone());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "glimmerd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
}
