use serde::{Deserialize, Serialize};

/// Result of the long-lived token exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

/// Credential as persisted in the token store file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix seconds of the last successful refresh
    #[serde(default)]
    pub refreshed_at: i64,
}

impl StoredToken {
    pub fn from_refresh(token: &RefreshedToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
            expires_in: token.expires_in,
            refreshed_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn expiry_timestamp(&self) -> i64 {
        self.refreshed_at + self.expires_in
    }
}
