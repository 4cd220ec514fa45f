//! Interconnect subsystem.
//!
//! # Data Flow
//! ```text
//! tick T (combinational):
//!     BusRequest
//!     → router.rs decode (match vector, lowest index)
//!     → router.rs fan_out (N port requests, cyc gated)
//!     → responders answer
//!     → router.rs respond (fan-in | latch)
//!
//! clock edge T → T+1:
//!     latch.rs ← cyc && no match
//! ```
//!
//! # Design Decisions
//! - Combinational logic is testable without a clock
//! - The latch is the only carried state
//! - A no-match never reaches a responder; the requester sees `err` one tick later

pub mod latch;
pub mod router;

pub use latch::NoMatchLatch;
pub use router::{Decode, Router};
