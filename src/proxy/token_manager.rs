use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::models::StoredToken;
use crate::modules::token_store;
use crate::proxy::config::ProxyConfig;
use crate::proxy::upstream::UpstreamClient;

/// Outcome of one refresh attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Token renewed; carries its lifetime in seconds
    Refreshed { expires_in: i64 },
    /// No credential to refresh
    MissingToken,
    /// Exchange failed, current token kept
    Failed(String),
}

/// Holds the single upstream credential shared by request handling and refresh
pub struct TokenManager {
    token: RwLock<Option<String>>,
    store_path: Option<PathBuf>,
}

impl TokenManager {
    pub fn new(token: Option<String>, store_path: Option<PathBuf>) -> Self {
        Self {
            token: RwLock::new(token),
            store_path,
        }
    }

    /// Create from config; a readable token store overrides the configured token
    pub fn from_config(config: &ProxyConfig) -> Self {
        let mut token = config.access_token.clone();

        if let Some(path) = &config.token_store_path {
            match token_store::load_token(path) {
                Ok(Some(stored)) => {
                    tracing::info!(
                        "Using stored token from {:?} (expires at {})",
                        path,
                        stored.expiry_timestamp()
                    );
                    token = Some(stored.access_token);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to load token store {:?}: {}", path, e),
            }
        }

        Self::new(token, config.token_store_path.clone())
    }

    /// Current token, if any
    pub async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    /// Renew the long-lived token. Never fails: every error is logged and
    /// reported in the outcome, and the current token stays in place.
    pub async fn refresh(&self, upstream: &UpstreamClient) -> RefreshOutcome {
        let Some(current) = self.get_token().await else {
            tracing::error!("No token to refresh");
            return RefreshOutcome::MissingToken;
        };

        let refreshed = match upstream.refresh_access_token(&current).await {
            Ok(t) if !t.access_token.is_empty() => t,
            Ok(_) => {
                tracing::error!("Token refresh failed: response carried no access_token");
                return RefreshOutcome::Failed("missing access_token".to_string());
            }
            Err(e) => {
                tracing::error!("Token refresh error: {}", e);
                return RefreshOutcome::Failed(e.to_string());
            }
        };

        tracing::info!(
            "Token refreshed successfully. Expires in {} seconds.",
            refreshed.expires_in
        );

        let stored = StoredToken::from_refresh(&refreshed);
        match &self.store_path {
            Some(path) => {
                if let Err(e) = token_store::save_token(path, &stored) {
                    tracing::error!("Failed to persist refreshed token to {:?}: {}", path, e);
                }
            }
            None => tracing::warn!(
                "TOKEN_STORE_PATH is not set, refreshed token will not survive a restart"
            ),
        }

        if stored.access_token != current {
            self.set_token(stored.access_token).await;
            upstream.clear_cache();
        }

        RefreshOutcome::Refreshed {
            expires_in: refreshed.expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_overrides_env_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        token_store::save_token(
            &path,
            &StoredToken {
                access_token: "stored".to_string(),
                expires_in: 60,
                refreshed_at: 0,
            },
        )
        .unwrap();

        let config = ProxyConfig {
            access_token: Some("env".to_string()),
            token_store_path: Some(path),
            ..ProxyConfig::default()
        };
        let manager = TokenManager::from_config(&config);
        assert_eq!(manager.get_token().await.as_deref(), Some("stored"));
    }

    #[tokio::test]
    async fn test_env_token_without_store() {
        let config = ProxyConfig {
            access_token: Some("env".to_string()),
            ..ProxyConfig::default()
        };
        let manager = TokenManager::from_config(&config);
        assert_eq!(manager.get_token().await.as_deref(), Some("env"));
    }

    #[tokio::test]
    async fn test_refresh_without_token() {
        let manager = TokenManager::new(None, None);
        let upstream = UpstreamClient::new(&ProxyConfig::default()).unwrap();
        assert_eq!(
            manager.refresh(&upstream).await,
            RefreshOutcome::MissingToken
        );
    }
}
