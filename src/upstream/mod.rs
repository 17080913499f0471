//! Upstream API integration subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (build GET, attach fixed headers, open span)
//!     → logging.rs (log outbound request)
//!     → reqwest transport (single shot, no retry)
//!     → logging.rs (log status, headers, body)
//!     → client.rs (decode JSON or map failure to ApiError)
//! ```
//!
//! # Design Decisions
//! - The transport and base URL are injected at construction
//! - Calls within one request run strictly one after another
//! - Not-found is reported separately from every other failure

pub mod client;
pub mod logging;

pub use client::UpstreamClient;
