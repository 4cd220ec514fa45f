//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → compiled into RouteTable + responders at construction
//! ```
//!
//! # Design Decisions
//! - Config is fixed for the lifetime of a router; there is no reload
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, warn_shadowed_routes, ConfigError};
pub use schema::BusConfig;
pub use schema::ObservabilityConfig;
pub use schema::ResponderConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
