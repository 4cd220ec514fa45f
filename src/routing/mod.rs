//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming address
//!     → router.rs (route table scan)
//!     → matcher.rs (masked equality per route)
//!     → Return: lowest matching index or NoMatch
//!
//! Route Compilation (at construction):
//!     RouteConfig[]
//!     → Keep configured order (order is priority)
//!     → Compile (pattern, mask) matchers
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at runtime
//! - Deterministic: same address always selects the same route
//! - First match wins (lowest index)

pub mod matcher;
pub mod router;

pub use matcher::{AddressMatcher, MatchVector};
pub use router::{Route, RouteTable};
