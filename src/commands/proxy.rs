use anyhow::Context;

use crate::proxy::{AxumServer, ProxyConfig};

/// Start the proxy service and run until Ctrl-C
pub async fn start_proxy_service(config: ProxyConfig) -> anyhow::Result<()> {
    let (server, handle) = AxumServer::start(&config)
        .await
        .context("Failed to start Axum server")?;

    tracing::info!(
        "Proxy service running on port {} (token configured: {})",
        config.port,
        server.state.token_manager.get_token().await.is_some()
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutdown signal received, stopping proxy service");
    server.stop();
    handle.await.context("Server task panicked")?;
    Ok(())
}
