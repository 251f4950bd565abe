use std::future::Future;
use std::io;
use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use itinerary_server::config::{OracleSource, ServerConfig};
use itinerary_server::matrix::{DistanceMatrixClient, MockMatrixClient};
use itinerary_server::web::{AppState, OracleBackend, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let oracle = match config.oracle {
        OracleSource::Live(matrix) => {
            info!(base_url = %matrix.base_url, "using Distance Matrix API");
            OracleBackend::Live(DistanceMatrixClient::new(matrix)?)
        }
        OracleSource::Fixture(path) => {
            let client = MockMatrixClient::new(&path)?;
            info!(
                path = %path.display(),
                pairs = client.len(),
                "using fixture responses"
            );
            OracleBackend::Fixture(client)
        }
    };

    let state = AppState::new(oracle);
    let shutdown = state.shutdown.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "itinerary planner listening");
    info!("  GET  /health          - Health check");
    info!("  POST /itinerary/plan  - Plan a multi-stop itinerary");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c(), shutdown))
        .await?;

    Ok(())
}

/// Wait for `signal`, then cancel in-flight plans. Never resolves if
/// listening for the signal fails.
async fn shutdown_on(signal: impl Future<Output = io::Result<()>>, token: CancellationToken) {
    if let Err(e) = signal.await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    info!("shutting down");
    token.cancel();
}
