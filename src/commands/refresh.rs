use crate::proxy::{ProxyConfig, RefreshOutcome, TokenManager, UpstreamClient};

/// Run one token refresh, for an external scheduler such as cron.
/// Refresh failures are logged, never returned.
pub async fn refresh_token_once(config: ProxyConfig) -> anyhow::Result<RefreshOutcome> {
    let token_manager = TokenManager::from_config(&config);
    let upstream = UpstreamClient::new(&config)?;

    let outcome = token_manager.refresh(&upstream).await;
    tracing::info!("Token refresh finished: {:?}", outcome);
    Ok(outcome)
}
