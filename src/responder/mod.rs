//! Downstream responder abstraction.
//!
//! # Data Flow
//! ```text
//! Router fan-out → port request (cyc gated)
//!     → Responder::respond (combinational, this tick)
//!     → Router fan-in
//! clock edge
//!     → Responder::clock (commit writes, advance wait states)
//! ```
//!
//! # Design Decisions
//! - `respond` takes `&self` so a tick's outputs cannot depend on call order
//! - Responders own their handshake timing; the router never tracks it
//! - A responder must ignore a port request whose cyc is low

pub mod error;
pub mod memory;

use std::fmt::Debug;

use crate::bus::{BusRequest, BusResponse, BusWidths};
use crate::config::{ResponderConfig, RouteConfig};

pub use error::ErrorResponder;
pub use memory::MemoryResponder;

/// A bus responder attached to one router port.
pub trait Responder: Send + Debug {
    /// Label for logs and metrics.
    fn name(&self) -> &str;

    /// Response driven for the current tick's port request.
    fn respond(&self, req: &BusRequest) -> BusResponse;

    /// Clock edge at the end of the current tick.
    fn clock(&mut self, req: &BusRequest);
}

/// Build the responder a route is configured with.
pub fn from_route(route: &RouteConfig, widths: BusWidths) -> Box<dyn Responder> {
    match &route.responder {
        ResponderConfig::Memory {
            size_words,
            wait_states,
        } => Box::new(MemoryResponder::new(
            route.name.clone(),
            *size_words,
            *wait_states,
            widths,
        )),
        ResponderConfig::Error => Box::new(ErrorResponder::new(route.name.clone())),
    }
}
