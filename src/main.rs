//! Sun events HTTP server.
//!
//! # Endpoints
//!
//! - `GET /v0/{sunrise|sunset}/lat{f64}/lon{f64}` - next sunrise or sunset
//!
//! # Configuration
//!
//! The first command-line argument names a YAML configuration file. Without
//! it, `./config/server.yaml` is used if present, otherwise built-in defaults.
//! `RUST_LOG` overrides the configured log level.

use tokio::net::TcpListener;
use tracing::{info, warn};

use sun_events::api::{AppState, create_router};
use sun_events::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use sun_events::error::{SunError, SunResult};
use sun_events::logging::init_logging;
use sun_events::solar::AlmanacCalculator;

#[tokio::main]
async fn main() -> SunResult<()> {
    let loader = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    init_logging(loader.logging());

    let server = loader.server();
    let state = AppState::new(AlmanacCalculator::new(), server.time_zone);
    let router = create_router(state);

    let addr = server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| SunError::Server {
            message: format!("bind failed on {addr}: {e}"),
        })?;

    info!(%addr, time_zone = ?server.time_zone, "Sun events server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SunError::Server {
            message: format!("serve error: {e}"),
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
