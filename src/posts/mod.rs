//! Post/comment domain subsystem.
//!
//! # Data Flow
//! ```text
//! upstream JSON payloads
//!     → types.rs (Post, Comment values, one request lifetime)
//!     → aggregate.rs (attach comments to their post)
//!     → filter.rs (narrow a post list by query predicates)
//!     → http handlers (serialize back to callers)
//! ```
//!
//! # Design Decisions
//! - Pure functions only: no I/O, no shared state
//! - Values are created fresh per request and never cached
//! - Filtering produces a new Vec; the input slice is never touched

pub mod aggregate;
pub mod filter;
pub mod types;

pub use aggregate::attach_comments;
pub use filter::{filter_posts, PostQuery};
pub use types::{Comment, Post};
