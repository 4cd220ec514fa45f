//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Simulator ticks produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (transaction and error counters)
//!
//! Consumers:
//!     → stderr log stream
//!     → Prometheus text exposition (CLI --metrics)
//! ```
//!
//! # Design Decisions
//! - Structured logging with route names as fields
//! - Metrics are no-ops until a recorder is installed
//! - stdout is left to tick reports

pub mod logging;
pub mod metrics;
