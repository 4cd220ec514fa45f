//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::bus::BusWidths;

/// Root configuration for one router instance.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Bus widths.
    pub bus: BusConfig,

    /// Route table, in priority order (index 0 first).
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Bus width configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BusConfig {
    /// Address width in bits (1..=64).
    pub address_width: u32,

    /// Data width in bits, split evenly across the four byte-select lanes.
    pub data_width: u32,
}

impl BusConfig {
    pub fn widths(&self) -> BusWidths {
        BusWidths::new(self.address_width, self.data_width)
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        let widths = BusWidths::default();
        Self {
            address_width: widths.address_width,
            data_width: widths.data_width,
        }
    }
}

/// One route table entry and the responder behind it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Address pattern; bits outside `mask` are ignored.
    pub pattern: u64,

    /// Bits of the address that must equal the pattern. Zero matches everything.
    pub mask: u64,

    /// Responder attached to this route's port.
    #[serde(default)]
    pub responder: ResponderConfig,
}

/// Responder model attached to a port.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponderConfig {
    /// Word-addressed RAM.
    Memory {
        #[serde(default = "default_size_words")]
        size_words: usize,
        #[serde(default)]
        wait_states: u32,
    },
    /// Terminates every transfer with an error.
    Error,
}

fn default_size_words() -> usize {
    1024
}

impl Default for ResponderConfig {
    fn default() -> Self {
        ResponderConfig::Memory {
            size_words: default_size_words(),
            wait_states: 0,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record transaction counters.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
        }
    }
}
