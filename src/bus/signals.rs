//! Request and response field sets.

use serde::{Deserialize, Serialize};

/// Width of the byte-select field in bits.
pub const SEL_WIDTH: u32 = 4;
/// Width of the burst-type (cycle type identifier) field in bits.
pub const CTI_WIDTH: u32 = 3;
/// Width of the burst-size (burst type extension) field in bits.
pub const BTE_WIDTH: u32 = 2;

/// Returns a mask with the low `bits` bits set.
pub fn width_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Address and data widths of one router instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusWidths {
    pub address_width: u32,
    pub data_width: u32,
}

impl BusWidths {
    pub const MAX_WIDTH: u32 = 64;

    pub fn new(address_width: u32, data_width: u32) -> Self {
        Self {
            address_width,
            data_width,
        }
    }

    /// Checks the widths a bus can actually be built with.
    ///
    /// The data bus is split into `SEL_WIDTH` byte-select lanes, so its
    /// width must divide evenly between them.
    pub fn check(&self) -> Result<(), String> {
        if self.address_width == 0 || self.address_width > Self::MAX_WIDTH {
            return Err(format!(
                "address width {} outside 1..={}",
                self.address_width,
                Self::MAX_WIDTH
            ));
        }
        if self.data_width < SEL_WIDTH
            || self.data_width > Self::MAX_WIDTH
            || self.data_width % SEL_WIDTH != 0
        {
            return Err(format!(
                "data width {} must be a multiple of {} in {}..={}",
                self.data_width,
                SEL_WIDTH,
                SEL_WIDTH,
                Self::MAX_WIDTH
            ));
        }
        Ok(())
    }

    pub fn address_mask(&self) -> u64 {
        width_mask(self.address_width)
    }

    pub fn data_mask(&self) -> u64 {
        width_mask(self.data_width)
    }

    /// Bits covered by one byte-select lane.
    pub fn lane_width(&self) -> u32 {
        self.data_width / SEL_WIDTH
    }
}

impl Default for BusWidths {
    fn default() -> Self {
        Self::new(32, 32)
    }
}

/// Request fields driven by the requester (and broadcast to responders).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRequest {
    pub address: u64,
    pub data: u64,
    /// Byte-select lanes, `SEL_WIDTH` bits.
    pub sel: u8,
    pub we: bool,
    /// Cycle-active: a transaction is in progress.
    pub cyc: bool,
    pub stb: bool,
    /// Burst-type code, `CTI_WIDTH` bits.
    pub cti: u8,
    /// Burst-size code, `BTE_WIDTH` bits.
    pub bte: u8,
}

impl BusRequest {
    /// An active single read of all lanes at `address`.
    pub fn read(address: u64) -> Self {
        Self {
            address,
            sel: width_mask(SEL_WIDTH) as u8,
            cyc: true,
            stb: true,
            ..Self::default()
        }
    }

    /// An active single write of all lanes at `address`.
    pub fn write(address: u64, data: u64) -> Self {
        Self {
            data,
            we: true,
            ..Self::read(address)
        }
    }

    /// The bus is idle: no cycle in progress.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Truncates every field to the wires it travels on.
    pub fn truncate(&self, widths: &BusWidths) -> Self {
        Self {
            address: self.address & widths.address_mask(),
            data: self.data & widths.data_mask(),
            sel: self.sel & width_mask(SEL_WIDTH) as u8,
            cti: self.cti & width_mask(CTI_WIDTH) as u8,
            bte: self.bte & width_mask(BTE_WIDTH) as u8,
            ..*self
        }
    }

    /// Same request with cycle-active forced to `cyc`.
    pub fn with_cyc(&self, cyc: bool) -> Self {
        Self { cyc, ..*self }
    }

    /// Cycle and strobe both asserted: the responder must act this tick.
    pub fn is_strobed(&self) -> bool {
        self.cyc && self.stb
    }
}

/// Response fields driven by a responder (or synthesized by the router).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusResponse {
    pub data: u64,
    pub ack: bool,
    pub err: bool,
    pub rty: bool,
}

impl BusResponse {
    pub fn ack(data: u64) -> Self {
        Self {
            data,
            ack: true,
            ..Self::default()
        }
    }

    pub fn error() -> Self {
        Self {
            err: true,
            ..Self::default()
        }
    }

    pub fn retry() -> Self {
        Self {
            rty: true,
            ..Self::default()
        }
    }
}
