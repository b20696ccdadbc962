//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound probe client and the Axum server lifecycle.

use crate::config::Config;
use crate::probes::ProbeClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The outbound HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let checker = ProbeClient::new(config.probe_timeout())?;

    let state = AppState {
        checker: Arc::new(checker),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
