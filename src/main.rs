use lead_capture::{router, AppState, Config, HttpLeadsApi};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let api = HttpLeadsApi::new(config.api_url.clone());
    info!(
        api = %api.base_url(),
        theme = ?config.theme,
        timeout_ms = config.request_timeout.as_millis() as u64,
        "lead form initialized"
    );

    let state = AppState::new(Arc::new(api), config.theme, config.request_timeout);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not listen for ctrl-c");
    }
    info!("shutting down");
}
