// Export proxy commands
pub mod proxy;
// Export token refresh command
pub mod refresh;

pub use proxy::start_proxy_service;
pub use refresh::refresh_token_once;
