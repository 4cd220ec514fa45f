//! Address matching logic.
//!
//! # Responsibilities
//! - Match an address against one (pattern, mask) pair
//! - Collect one match bit per route into a `MatchVector`
//!
//! # Design Decisions
//! - Masked equality on both sides: pattern bits outside the mask are don't-care
//! - Mask of zero = always matches (wildcard)
//! - Matching is pure; no state is kept between evaluations

use serde::Serialize;

/// One route's (pattern, mask) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMatcher {
    pattern: u64,
    mask: u64,
}

impl AddressMatcher {
    pub fn new(pattern: u64, mask: u64) -> Self {
        Self { pattern, mask }
    }

    /// Matches every address.
    pub fn wildcard() -> Self {
        Self::new(0, 0)
    }

    pub fn pattern(&self) -> u64 {
        self.pattern
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns true if the masked address equals the masked pattern.
    pub fn matches(&self, address: u64) -> bool {
        (address & self.mask) == (self.pattern & self.mask)
    }

    /// Returns true if every address matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &AddressMatcher) -> bool {
        // self may only care about bits other also pins, and must agree on them
        self.mask & !other.mask == 0 && (self.pattern ^ other.pattern) & self.mask == 0
    }
}

/// One match bit per route, in route-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchVector(Vec<bool>);

impl MatchVector {
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Lowest matching index, scanning in priority order.
    pub fn first(&self) -> Option<usize> {
        self.0.iter().position(|&hit| hit)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&hit| hit)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl std::fmt::Display for MatchVector {
    /// Index 0 is printed leftmost.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for hit in &self.0 {
            f.write_str(if *hit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
