//! Address-decoding bus router library.
//!
//! Routes each transaction from one requester to exactly one of N
//! responders by (pattern, mask) address match, lowest index first, and
//! reports unmatched transactions with a one-tick-delayed bus error.

pub mod bus;
pub mod config;
pub mod error;
pub mod interconnect;
pub mod observability;
pub mod responder;
pub mod routing;
pub mod sim;

pub use bus::{BusRequest, BusResponse, BusWidths};
pub use config::RouterConfig;
pub use error::RouterError;
pub use interconnect::Router;
pub use sim::Simulator;
