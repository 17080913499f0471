//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request-id / trace context / basic auth layers
//!     → request.rs (validate path and query parameters)
//!     → handlers.rs (call upstream client, filter, shape response)
//!     → JSON body or problem document back to the caller
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer, ServerError};
