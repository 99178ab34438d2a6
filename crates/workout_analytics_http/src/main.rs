use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::info;

use workout_analytics_http::config::ServerConfig;
use workout_analytics_http::{AppState, app};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = ServerConfig::from_env();

    // Configure logging from `WORKOUT_ANALYTICS_LOG_LEVEL` (or fallback to
    // `RUST_LOG`, default `info`).
    let env_filter = tracing_subscriber::EnvFilter::try_new(config.log_filter.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    info!(log_filter = %config.log_filter, "workout_analytics_http: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;
    let state = Arc::new(AppState { metrics: handle });
    let router = app(state, &config);

    info!(
        address = %config.address,
        max_body_bytes = config.max_body_size,
        "starting HTTP server"
    );
    let listener = match tokio::net::TcpListener::bind(config.address).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {e}", config.address);
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, router.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install ctrl+c handler");
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
