//! Construction-time errors.
//!
//! A transaction that matches no route is not an error at this level; it is
//! reported on the bus itself through the synthesized error flag.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors raised while building a router or simulator.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A router needs at least one route.
    #[error("route table is empty")]
    EmptyRouteTable,

    /// Every route needs exactly one responder.
    #[error("route table has {routes} entries but {responders} responders were supplied")]
    ResponderCountMismatch { routes: usize, responders: usize },

    /// A route compares address bits the bus does not carry, so it could never match.
    #[error("route '{route}' mask {mask:#x} has bits above the {width}-bit address")]
    MaskTooWide { route: String, mask: u64, width: u32 },

    /// Address or data width cannot be built.
    #[error("invalid bus widths: {0}")]
    InvalidWidths(String),

    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for router construction.
pub type RouterResult<T> = Result<T, RouterError>;
