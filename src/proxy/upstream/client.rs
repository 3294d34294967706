// Upstream client for the Instagram Graph API

use reqwest::{Client, Response};
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{MediaPage, RefreshedToken};
use crate::proxy::config::ProxyConfig;
use crate::proxy::upstream::cache::ResponseCache;

/// Fields requested for every media item
pub const MEDIA_FIELDS: &str = "id,media_type,media_url,thumbnail_url,permalink,caption,timestamp";

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
    cache: ResponseCache,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> AppResult<Self> {
        let http_client = crate::utils::http::create_client_with_proxy(
            config.request_timeout,
            Some(&config.upstream_proxy),
        )?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache: ResponseCache::new(config.cache_ttl),
        })
    }

    /// Build a Graph API URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Url> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| AppError::Config(format!("Invalid Instagram API URL: {}", e)))
    }

    /// Fetch the latest media of the token's owner.
    ///
    /// Successful bodies are served from the response cache while fresh;
    /// a non-2xx upstream answer becomes `AppError::Upstream`.
    pub async fn fetch_media(&self, access_token: &str, limit: usize) -> AppResult<MediaPage> {
        let cache_key = limit.to_string();
        if let Some(body) = self.cache.get(&cache_key) {
            tracing::debug!("Serving media listing (limit {}) from cache", limit);
            return Ok(serde_json::from_str(&body)?);
        }

        let limit_str = limit.to_string();
        let url = self.build_url(
            "me/media",
            &[
                ("fields", MEDIA_FIELDS),
                ("limit", limit_str.as_str()),
                ("access_token", access_token),
            ],
        )?;

        let response = self.http_client.get(url).send().await?;
        let body = Self::success_body(response).await?;

        let page: MediaPage = serde_json::from_str(&body)?;
        self.cache.insert(cache_key, body);
        Ok(page)
    }

    /// Exchange the current long-lived token for a renewed one
    pub async fn refresh_access_token(&self, access_token: &str) -> AppResult<RefreshedToken> {
        let url = self.build_url(
            "refresh_access_token",
            &[
                ("grant_type", "ig_refresh_token"),
                ("access_token", access_token),
            ],
        )?;

        let response = self.http_client.get(url).send().await?;
        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Drop cached listings, e.g. after the credential changed
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn success_body(response: Response) -> AppResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> UpstreamClient {
        let config = ProxyConfig {
            api_base_url: base.to_string(),
            ..ProxyConfig::default()
        };
        UpstreamClient::new(&config).unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = client_for("https://graph.instagram.com/");
        let url = client
            .build_url("me/media", &[("fields", MEDIA_FIELDS), ("limit", "6")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.instagram.com/me/media?fields=id%2Cmedia_type%2Cmedia_url%2Cthumbnail_url%2Cpermalink%2Ccaption%2Ctimestamp&limit=6"
        );

        let url = client
            .build_url(
                "refresh_access_token",
                &[("grant_type", "ig_refresh_token"), ("access_token", "a b")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.instagram.com/refresh_access_token?grant_type=ig_refresh_token&access_token=a+b"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = client_for("not a url");
        assert!(matches!(
            client.build_url("me/media", &[]),
            Err(AppError::Config(_))
        ));
    }
}
