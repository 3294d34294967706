// Upstream module - Instagram Graph API access

pub mod cache;
pub mod client;

pub use client::UpstreamClient;
