pub mod config;
pub mod logger;
pub mod token_store;

pub use config::*;
pub use logger::*;
