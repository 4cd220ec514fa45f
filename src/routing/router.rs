//! Route table lookup.
//!
//! # Responsibilities
//! - Store compiled routes in configured order
//! - Evaluate every route against an address (match vector)
//! - Return the lowest-index matching route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction
//! - O(n) linear scan with early exit; index order is priority order
//! - Explicit `None` rather than a silent default; a default route is just
//!   a wildcard placed last

use crate::config::RouteConfig;
use crate::error::RouterError;
use crate::routing::matcher::{AddressMatcher, MatchVector};

/// A compiled route entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub matcher: AddressMatcher,
}

impl Route {
    pub fn new(name: impl Into<String>, pattern: u64, mask: u64) -> Self {
        Self {
            name: name.into(),
            matcher: AddressMatcher::new(pattern, mask),
        }
    }
}

/// Ordered (pattern, mask) table, one entry per responder.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
        if routes.is_empty() {
            return Err(RouterError::EmptyRouteTable);
        }
        Ok(Self { routes })
    }

    /// Compile routes from configuration, preserving their order.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, RouterError> {
        let routes = configs
            .iter()
            .map(|c| Route::new(c.name.clone(), c.pattern, c.mask))
            .collect();
        Self::new(routes)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Evaluate every route against `address`.
    pub fn match_vector(&self, address: u64) -> MatchVector {
        MatchVector::new(
            self.routes
                .iter()
                .map(|r| r.matcher.matches(address))
                .collect(),
        )
    }

    /// Lowest index whose route matches `address`.
    pub fn select(&self, address: u64) -> Option<usize> {
        self.routes.iter().position(|r| r.matcher.matches(address))
    }
}
