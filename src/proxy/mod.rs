// proxy module - Instagram photo proxy service

pub mod config;
pub mod server;
pub mod token_manager;

pub mod common; // Common tools
pub mod handlers; // API endpoint handlers
pub mod mappers; // Upstream -> site shapes
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use config::ProxyConfig;
pub use server::{build_router, AppState, AxumServer};
pub use token_manager::{RefreshOutcome, TokenManager};
pub use upstream::UpstreamClient;
