//! Post relay library: upstream client, post/comment merge and filtering,
//! and the HTTP surface that exposes them.

pub mod actuator;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod posts;
pub mod security;
pub mod upstream;

pub use config::RelayConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::UpstreamClient;
