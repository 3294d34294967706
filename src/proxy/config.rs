use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://graph.instagram.com";
pub const DEFAULT_PHOTO_COUNT: usize = 6;
pub const DEFAULT_PORT: u16 = 8787;

/// Proxy service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Whether LAN access is allowed
    /// - false: loopback only 127.0.0.1 (default)
    /// - true: all interfaces 0.0.0.0
    #[serde(default)]
    pub allow_lan_access: bool,

    /// Listen port
    pub port: u16,

    /// Browser origins allowed to call the proxy, in priority order
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Long-lived Instagram access token
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Number of photos returned per request
    #[serde(default = "default_photo_count")]
    pub photo_count: usize,

    /// Instagram Graph API base URL
    #[serde(default = "default_api_base")]
    pub api_base_url: String,

    /// Upstream request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Lifetime of cached upstream listings (seconds, 0 disables)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    /// In-process token refresh period (seconds, 0 disables)
    #[serde(default)]
    pub refresh_interval: u64,

    /// File the renewed token is written to
    #[serde(default)]
    pub token_store_path: Option<PathBuf>,

    /// Upstream proxy configuration
    #[serde(default)]
    pub upstream_proxy: UpstreamProxyConfig,
}

/// Upstream proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamProxyConfig {
    /// Whether enabled
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            access_token: None,
            photo_count: default_photo_count(),
            api_base_url: default_api_base(),
            request_timeout: default_request_timeout(),
            cache_ttl: default_cache_ttl(),
            refresh_interval: 0,
            token_store_path: None,
            upstream_proxy: UpstreamProxyConfig::default(),
        }
    }
}

fn default_photo_count() -> usize {
    DEFAULT_PHOTO_COUNT
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_cache_ttl() -> u64 {
    3600
}

impl ProxyConfig {
    /// Get actual listen address
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

/// Split a comma-separated origin list, dropping blank entries
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Leading-integer parse of the photo count (an optional `+` sign is
/// accepted); unset, non-numeric, negative and zero all yield the default.
pub fn parse_photo_count(raw: Option<&str>) -> usize {
    let trimmed = raw.unwrap_or_default().trim_start();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<usize>() {
        Ok(0) | Err(_) => DEFAULT_PHOTO_COUNT,
        Ok(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://on.voyage, https://www.on.voyage ,,"),
            vec!["https://on.voyage", "https://www.on.voyage"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_parse_photo_count() {
        assert_eq!(parse_photo_count(None), 6);
        assert_eq!(parse_photo_count(Some("abc")), 6);
        assert_eq!(parse_photo_count(Some("0")), 6);
        assert_eq!(parse_photo_count(Some("-3")), 6);
        assert_eq!(parse_photo_count(Some("12")), 12);
        assert_eq!(parse_photo_count(Some(" 4 photos")), 4);
        assert_eq!(parse_photo_count(Some("+4")), 4);
        assert_eq!(parse_photo_count(Some("++4")), 6);
    }

    #[test]
    fn test_bind_address() {
        let mut config = ProxyConfig::default();
        assert_eq!(config.get_bind_address(), "127.0.0.1");
        config.allow_lan_access = true;
        assert_eq!(config.get_bind_address(), "0.0.0.0");
    }
}
