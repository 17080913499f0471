//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → auth.rs (public path? valid Basic credentials?)
//!     → Pass to handlers, or 401 with a Basic challenge
//! ```
//!
//! # Design Decisions
//! - Fail closed: every path not explicitly public requires credentials
//! - Credentials are never forwarded upstream

pub mod auth;
