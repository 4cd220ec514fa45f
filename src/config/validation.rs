//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (widths, masks, memory sizes)
//! - Detect duplicate and shadowed routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Overlapping routes are legal (priority resolves them); a route that can
//!   never be selected is only reported, see `shadowed_routes`

use std::collections::HashSet;

use thiserror::Error;

use crate::bus::signals::width_mask;
use crate::config::schema::{ResponderConfig, RouterConfig};
use crate::routing::AddressMatcher;

/// Largest memory a route may configure, in words.
pub const MAX_MEMORY_WORDS: usize = 1 << 24;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bus: {0}")]
    Widths(String),

    #[error("no routes configured")]
    NoRoutes,

    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("route '{name}' mask {mask:#x} has bits above the {width}-bit address")]
    MaskTooWide { name: String, mask: u64, width: u32 },

    #[error("route '{name}' memory has zero words")]
    EmptyMemory { name: String },

    #[error("route '{name}' memory of {size_words} words exceeds the {max}-word limit")]
    MemoryTooLarge {
        name: String,
        size_words: usize,
        max: usize,
    },
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let widths = config.bus.widths();

    if let Err(e) = widths.check() {
        errors.push(ValidationError::Widths(e));
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if route.mask & !width_mask(widths.address_width) != 0 {
            errors.push(ValidationError::MaskTooWide {
                name: route.name.clone(),
                mask: route.mask,
                width: widths.address_width,
            });
        }

        if let ResponderConfig::Memory { size_words, .. } = route.responder {
            if size_words == 0 {
                errors.push(ValidationError::EmptyMemory {
                    name: route.name.clone(),
                });
            } else if size_words > MAX_MEMORY_WORDS {
                errors.push(ValidationError::MemoryTooLarge {
                    name: route.name.clone(),
                    size_words,
                    max: MAX_MEMORY_WORDS,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Route names `(earlier, later)` where `later` can never be selected.
pub fn shadowed_routes(config: &RouterConfig) -> Vec<(String, String)> {
    let matchers: Vec<AddressMatcher> = config
        .routes
        .iter()
        .map(|r| AddressMatcher::new(r.pattern, r.mask))
        .collect();

    let mut shadowed = Vec::new();
    for (j, later) in matchers.iter().enumerate() {
        if let Some(i) = matchers[..j].iter().position(|m| m.covers(later)) {
            shadowed.push((config.routes[i].name.clone(), config.routes[j].name.clone()));
        }
    }
    shadowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(name: &str, pattern: u64, mask: u64) -> RouteConfig {
        RouteConfig {
            name: name.to_string(),
            pattern,
            mask,
            responder: ResponderConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = RouterConfig::default();
        config.routes.push(route("ram", 0x0, 0xF000_0000));
        config.routes.push(route("default", 0x0, 0x0));
        assert!(validate_config(&config).is_ok());
        assert!(shadowed_routes(&config).is_empty());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.bus.address_width = 8;
        config.bus.data_width = 30;
        config.routes.push(route("a", 0x0, 0x1FF));
        config.routes.push(route("a", 0x0, 0x0));
        config.routes.push(RouteConfig {
            responder: ResponderConfig::Memory {
                size_words: 0,
                wait_states: 0,
            },
            ..route("", 0x0, 0x0)
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::Widths(_)));
        assert!(errors.contains(&ValidationError::MaskTooWide {
            name: "a".into(),
            mask: 0x1FF,
            width: 8
        }));
        assert!(errors.contains(&ValidationError::DuplicateName { name: "a".into() }));
        assert!(errors.contains(&ValidationError::EmptyName { index: 2 }));
        assert!(errors.contains(&ValidationError::EmptyMemory { name: "".into() }));
    }

    #[test]
    fn test_no_routes() {
        let errors = validate_config(&RouterConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoRoutes]);
    }

    #[test]
    fn test_pattern_outside_mask_is_allowed() {
        let mut config = RouterConfig::default();
        config.bus.address_width = 8;
        config.routes.push(route("a", 0xFFFF_FFFF, 0xF0));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_shadowed_routes() {
        let mut config = RouterConfig::default();
        config.routes.push(route("default", 0x0, 0x0));
        config.routes.push(route("ram", 0x0, 0xF000_0000));
        assert_eq!(
            shadowed_routes(&config),
            vec![("default".to_string(), "ram".to_string())]
        );
    }

    #[test]
    fn test_memory_size_limit() {
        let mut config = RouterConfig::default();
        config.routes.push(RouteConfig {
            responder: ResponderConfig::Memory {
                size_words: 1_000_000_000_000,
                wait_states: 0,
            },
            ..route("huge", 0x0, 0x0)
        });
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MemoryTooLarge {
                name: "huge".into(),
                size_words: 1_000_000_000_000,
                max: MAX_MEMORY_WORDS,
            }]
        );

        config.routes[0].responder = ResponderConfig::Memory {
            size_words: MAX_MEMORY_WORDS,
            wait_states: 0,
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_full_width_mask() {
        let mut config = RouterConfig::default();
        config.bus.address_width = 64;
        config.bus.data_width = 64;
        config.routes.push(route("all", 0, u64::MAX));
        assert!(validate_config(&config).is_ok());
    }
}
