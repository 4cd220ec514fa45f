//! Bus signal definitions.
//!
//! # Data Flow
//! ```text
//! Requester drives BusRequest
//!     → interconnect (match, select, fan-out)
//!     → N responders, each sees a BusRequest with its own cycle-active
//!     → N BusResponses
//!     → interconnect (fan-in + no-match latch)
//!     → Requester samples one BusResponse
//! ```
//!
//! # Design Decisions
//! - Upstream and downstream share one field set (`BusRequest`/`BusResponse`)
//! - Widths are fixed at construction and applied by truncation, like wires
//! - Addresses and data are carried in `u64`; narrower buses mask the top bits

pub mod signals;

pub use signals::{BusRequest, BusResponse, BusWidths};
pub use signals::{BTE_WIDTH, CTI_WIDTH, SEL_WIDTH};
