use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::proxy::config::{
    parse_origins, parse_photo_count, ProxyConfig, UpstreamProxyConfig, DEFAULT_PORT,
};

/// Merge a `.env` file into the process environment, if one exists
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Failed to read .env file: {}", e);
            None
        }
    }
}

/// Load proxy config from the process environment
pub fn load_proxy_config() -> AppResult<ProxyConfig> {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build config from any key lookup
pub fn config_from_lookup<F>(lookup: F) -> AppResult<ProxyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ProxyConfig::default();
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let port = match non_empty("PORT") {
        Some(v) => v
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid PORT {:?}: {}", v, e)))?,
        None => DEFAULT_PORT,
    };

    let upstream_proxy = match non_empty("UPSTREAM_PROXY_URL") {
        Some(url) => UpstreamProxyConfig {
            enabled: true,
            url: url.trim().to_string(),
        },
        None => UpstreamProxyConfig::default(),
    };

    Ok(ProxyConfig {
        allow_lan_access: non_empty("ALLOW_LAN_ACCESS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.allow_lan_access),
        port,
        allowed_origins: parse_origins(&lookup("ALLOWED_ORIGINS").unwrap_or_default()),
        access_token: non_empty("INSTAGRAM_ACCESS_TOKEN").map(|v| v.trim().to_string()),
        photo_count: parse_photo_count(lookup("PHOTO_COUNT").as_deref()),
        api_base_url: non_empty("INSTAGRAM_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url),
        request_timeout: parse_secs(&lookup, "REQUEST_TIMEOUT_SECS", defaults.request_timeout),
        cache_ttl: parse_secs(&lookup, "CACHE_TTL_SECS", defaults.cache_ttl),
        refresh_interval: parse_secs(&lookup, "REFRESH_INTERVAL_SECS", defaults.refresh_interval),
        token_store_path: non_empty("TOKEN_STORE_PATH").map(PathBuf::from),
        upstream_proxy,
    })
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => v.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} {:?}, using {}", key, v, default);
            default
        }),
        _ => default,
    }
}
