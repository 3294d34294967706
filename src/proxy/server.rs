use crate::proxy::{ProxyConfig, TokenManager, UpstreamClient};
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub token_manager: Arc<TokenManager>,
    pub upstream: Arc<UpstreamClient>,
    pub photo_count: usize,
}

impl AppState {
    pub fn from_config(config: &ProxyConfig) -> crate::error::AppResult<Self> {
        Ok(Self {
            token_manager: Arc::new(TokenManager::from_config(config)),
            upstream: Arc::new(UpstreamClient::new(config)?),
            photo_count: config.photo_count,
        })
    }
}

/// Build the proxy router: one GET route, a JSON 404 for everything else,
/// and CORS on every response. Request logging wraps CORS so preflights
/// are logged too.
pub fn build_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    use crate::proxy::handlers::instagram;
    use crate::proxy::middleware;

    let cors = Arc::new(middleware::CorsPolicy::new(allowed_origins));

    Router::new()
        .route(
            "/api/instagram",
            // HEAD would otherwise fall through to the GET handler
            get(instagram::handle_photos)
                .head(instagram::handle_not_found)
                .fallback(instagram::handle_not_found),
        )
        .fallback(instagram::handle_not_found)
        .layer(axum::middleware::from_fn_with_state(
            cors,
            middleware::cors_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .with_state(state)
}

/// Spawn the periodic token refresh; the first run happens one interval after start
pub fn spawn_refresh_task(state: AppState, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_secs(interval_secs);
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            tracing::info!("Scheduled token refresh starting");
            let outcome = state.token_manager.refresh(&state.upstream).await;
            debug!("Scheduled token refresh finished: {:?}", outcome);
        }
    })
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
    refresh_handle: Option<JoinHandle<()>>,
    pub state: AppState,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        config: &ProxyConfig,
    ) -> Result<(Self, JoinHandle<()>), crate::error::AppError> {
        let state = AppState::from_config(config)?;

        if state.token_manager.get_token().await.is_none() {
            tracing::warn!("INSTAGRAM_ACCESS_TOKEN is not set, /api/instagram will answer 500");
        }

        let app = build_router(state.clone(), config.allowed_origins.clone());

        // Bind address
        let addr = format!("{}:{}", config.get_bind_address(), config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Instagram proxy started at http://{}", addr);

        let refresh_handle = if config.refresh_interval > 0 {
            tracing::info!(
                "Token refresh scheduled every {} seconds",
                config.refresh_interval
            );
            Some(spawn_refresh_task(state.clone(), config.refresh_interval))
        } else {
            None
        };

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
            refresh_handle,
            state,
        };

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("Instagram proxy stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    /// Stop server and the refresh task
    pub fn stop(mut self) {
        if let Some(handle) = self.refresh_handle.take() {
            handle.abort();
        }
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
