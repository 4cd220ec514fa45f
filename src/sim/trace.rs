//! Requester stimulus files.
//!
//! A trace is an ordered list of steps; each step drives one request for
//! `repeat` consecutive ticks.
//!
//! ```toml
//! [[steps]]
//! address = 0x1000_0000
//! data = 0xCAFE
//! we = true
//! repeat = 2
//!
//! [[steps]]
//! cyc = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bus::BusRequest;
use crate::config::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Trace {
    /// Requests in tick order, with repeats expanded.
    pub fn requests(&self) -> impl Iterator<Item = BusRequest> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat(step.request()).take(step.repeat as usize))
    }

    /// Total ticks the trace drives.
    pub fn ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.repeat)).sum()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceStep {
    pub address: u64,
    pub data: u64,
    pub sel: u8,
    pub we: bool,
    pub cyc: bool,
    pub stb: bool,
    pub cti: u8,
    pub bte: u8,
    pub repeat: u32,
}

impl Default for TraceStep {
    fn default() -> Self {
        let read = BusRequest::read(0);
        Self {
            address: 0,
            data: 0,
            sel: read.sel,
            we: false,
            cyc: true,
            stb: true,
            cti: 0,
            bte: 0,
            repeat: 1,
        }
    }
}

impl TraceStep {
    pub fn request(&self) -> BusRequest {
        BusRequest {
            address: self.address,
            data: self.data,
            sel: self.sel,
            we: self.we,
            cyc: self.cyc,
            stb: self.stb,
            cti: self.cti,
            bte: self.bte,
        }
    }
}

pub fn parse_trace(content: &str) -> Result<Trace, ConfigError> {
    Ok(toml::from_str(content)?)
}

pub fn load_trace(path: &Path) -> Result<Trace, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_trace(&content)
}
