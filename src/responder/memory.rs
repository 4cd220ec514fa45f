//! Word-addressed RAM responder.
//!
//! # Responsibilities
//! - Serve reads combinationally once the configured wait states elapse
//! - Commit writes lane by lane on the acknowledging clock edge
//!
//! # Design Decisions
//! - Byte addresses, one word per `SEL_WIDTH` lanes: word index = address >> 2
//! - Addresses wrap modulo the memory size; the router already decoded the region
//! - Wait-state counter restarts after every acknowledged transfer

use crate::bus::signals::width_mask;
use crate::bus::{BusRequest, BusResponse, BusWidths, SEL_WIDTH};
use crate::config::validation::MAX_MEMORY_WORDS;
use crate::responder::Responder;

#[derive(Debug, Clone)]
pub struct MemoryResponder {
    name: String,
    words: Vec<u64>,
    wait_states: u32,
    waited: u32,
    lane_width: u32,
    data_mask: u64,
}

impl MemoryResponder {
    /// `size_words` is clamped to `1..=MAX_MEMORY_WORDS`.
    pub fn new(name: impl Into<String>, size_words: usize, wait_states: u32, widths: BusWidths) -> Self {
        Self {
            name: name.into(),
            words: vec![0; size_words.clamp(1, MAX_MEMORY_WORDS)],
            wait_states,
            waited: 0,
            lane_width: widths.lane_width(),
            data_mask: widths.data_mask(),
        }
    }

    fn index(&self, address: u64) -> usize {
        ((address >> 2) % self.words.len() as u64) as usize
    }

    /// Word at a byte address, bypassing the bus.
    pub fn peek(&self, address: u64) -> u64 {
        self.words[self.index(address)]
    }

    /// Store a word at a byte address, bypassing the bus.
    pub fn poke(&mut self, address: u64, value: u64) {
        let i = self.index(address);
        self.words[i] = value & self.data_mask;
    }

    fn ready(&self) -> bool {
        self.waited >= self.wait_states
    }

    fn lane_mask(&self, sel: u8) -> u64 {
        (0..SEL_WIDTH)
            .filter(|lane| sel & (1 << lane) != 0)
            .fold(0, |acc, lane| {
                acc | (width_mask(self.lane_width) << (lane * self.lane_width))
            })
    }
}

impl Responder for MemoryResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, req: &BusRequest) -> BusResponse {
        if !req.is_strobed() || !self.ready() {
            return BusResponse::default();
        }
        BusResponse::ack(self.peek(req.address))
    }

    fn clock(&mut self, req: &BusRequest) {
        if !req.is_strobed() {
            self.waited = 0;
            return;
        }
        if !self.ready() {
            self.waited += 1;
            return;
        }
        if req.we {
            let i = self.index(req.address);
            let lanes = self.lane_mask(req.sel) & self.data_mask;
            self.words[i] = (self.words[i] & !lanes) | (req.data & lanes);
        }
        self.waited = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(mem: &mut MemoryResponder, req: &BusRequest) -> BusResponse {
        let resp = mem.respond(req);
        mem.clock(req);
        resp
    }

    #[test]
    fn test_zero_wait_read_write() {
        let mut mem = MemoryResponder::new("ram", 16, 0, BusWidths::default());
        let w = step(&mut mem, &BusRequest::write(0x8, 0xDEAD_BEEF));
        assert!(w.ack);

        let r = step(&mut mem, &BusRequest::read(0x8));
        assert!(r.ack);
        assert_eq!(r.data, 0xDEAD_BEEF);
    }

    #[test]
    fn test_inactive_cycle_ignored() {
        let mut mem = MemoryResponder::new("ram", 16, 0, BusWidths::default());
        let req = BusRequest::write(0x0, 0x1234).with_cyc(false);
        assert_eq!(step(&mut mem, &req), BusResponse::default());
        assert_eq!(mem.peek(0x0), 0);
    }

    #[test]
    fn test_wait_states_delay_ack() {
        let mut mem = MemoryResponder::new("ram", 16, 2, BusWidths::default());
        mem.poke(0x4, 77);
        let req = BusRequest::read(0x4);
        assert!(!step(&mut mem, &req).ack);
        assert!(!step(&mut mem, &req).ack);
        let resp = step(&mut mem, &req);
        assert!(resp.ack);
        assert_eq!(resp.data, 77);
        // Counter restarts for the next transfer.
        assert!(!step(&mut mem, &req).ack);
    }

    #[test]
    fn test_dropping_cyc_restarts_wait() {
        let mut mem = MemoryResponder::new("ram", 16, 1, BusWidths::default());
        let req = BusRequest::read(0x0);
        assert!(!step(&mut mem, &req).ack);
        step(&mut mem, &BusRequest::idle());
        assert!(!step(&mut mem, &req).ack);
        assert!(step(&mut mem, &req).ack);
    }

    #[test]
    fn test_byte_select_lanes() {
        let mut mem = MemoryResponder::new("ram", 4, 0, BusWidths::default());
        mem.poke(0x0, 0x1122_3344);
        let req = BusRequest {
            sel: 0b0101,
            ..BusRequest::write(0x0, 0xAABB_CCDD)
        };
        step(&mut mem, &req);
        assert_eq!(mem.peek(0x0), 0x11BB_33DD);
    }

    #[test]
    fn test_address_wraps() {
        let mut mem = MemoryResponder::new("ram", 4, 0, BusWidths::default());
        mem.poke(0x0, 9);
        assert_eq!(mem.peek(0x10), 9);
    }

    #[test]
    fn test_lanes_follow_data_width() {
        // 16-bit data: four 4-bit lanes.
        let mut mem = MemoryResponder::new("ram", 4, 0, BusWidths::new(16, 16));
        mem.poke(0x0, 0xABCD);
        let req = BusRequest {
            sel: 0b0010,
            ..BusRequest::write(0x0, 0x1234_0F0F)
        };
        step(&mut mem, &req);
        assert_eq!(mem.peek(0x0), 0xAB0D);
    }
}
