//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (upstream call counters and latency histograms)
//!     → trace_context.rs (per-request trace/span ids, response headers)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//!     → Callers correlating responses via X-Trace-Id / X-Span-Id
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Every request runs inside a span carrying its trace id
//! - Metrics macros are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
pub mod trace_context;

pub use trace_context::{inject_trace_headers, TraceContext, SPAN_ID_HEADER, TRACE_ID_HEADER};
