//! Address-decoding interconnect between one requester and N responders.
//!
//! # Responsibilities
//! - Evaluate the match vector and priority selection for a request
//! - Fan out request fields to every responder, gating only cycle-active
//! - Fan in the selected responder's response
//! - Keep the one-bit no-match latch and OR it into the error flag
//!
//! # Design Decisions
//! - Everything except `clock` takes `&self` and is a pure function of its inputs
//! - The latch is updated only by `clock`, once per tick
//! - No transaction tracking beyond the latch; handshakes belong to the endpoints

use crate::bus::{BusRequest, BusResponse, BusWidths};
use crate::config::RouterConfig;
use crate::error::{RouterError, RouterResult};
use crate::interconnect::latch::NoMatchLatch;
use crate::routing::{MatchVector, RouteTable};

/// Combinational decode of one tick's request.
///
/// Fan-out, fan-in and the clock edge all read the selection from here, so
/// the route table is scanned once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decode {
    /// Requester fields truncated to the bus widths.
    pub wire: BusRequest,
    pub matches: MatchVector,
    pub selected: Option<usize>,
}

/// The interconnect component.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    widths: BusWidths,
    no_match: NoMatchLatch,
}

impl Router {
    pub fn new(table: RouteTable, widths: BusWidths) -> RouterResult<Self> {
        widths.check().map_err(RouterError::InvalidWidths)?;

        // Address bits above the bus width never reach the matcher.
        if let Some(route) = table
            .routes()
            .iter()
            .find(|r| r.matcher.mask() & !widths.address_mask() != 0)
        {
            return Err(RouterError::MaskTooWide {
                route: route.name.clone(),
                mask: route.matcher.mask(),
                width: widths.address_width,
            });
        }

        Ok(Self {
            table,
            widths,
            no_match: NoMatchLatch::new(),
        })
    }

    /// Build from an already-validated configuration.
    pub fn from_config(config: &RouterConfig) -> RouterResult<Self> {
        let table = RouteTable::from_config(&config.routes)?;
        Self::new(table, config.bus.widths())
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Number of downstream ports.
    pub fn ports(&self) -> usize {
        self.table.len()
    }

    /// Match every route against the request address.
    pub fn match_vector(&self, address: u64) -> MatchVector {
        self.table.match_vector(address & self.widths.address_mask())
    }

    /// Lowest-index matching route, if any.
    pub fn select(&self, address: u64) -> Option<usize> {
        self.table.select(address & self.widths.address_mask())
    }

    pub fn decode(&self, req: &BusRequest) -> Decode {
        let wire = req.truncate(&self.widths);
        let matches = self.table.match_vector(wire.address);
        let selected = matches.first();
        Decode {
            wire,
            matches,
            selected,
        }
    }

    /// Per-port requests for this tick.
    ///
    /// Every port sees the same address, data, select, write-enable, strobe
    /// and burst fields. Only the selected port sees cycle-active, and only
    /// while the requester holds it.
    pub fn fan_out(&self, decode: &Decode) -> Vec<BusRequest> {
        let wire = decode.wire;
        (0..self.ports())
            .map(|port| wire.with_cyc(wire.cyc && decode.selected == Some(port)))
            .collect()
    }

    /// The selected port's data, ack and retry; zeroes when nothing is selected.
    ///
    /// The error flag here is the responder's alone; see `respond` for the
    /// requester-visible flag.
    pub fn fan_in(&self, selected: Option<usize>, responses: &[BusResponse]) -> BusResponse {
        match selected.and_then(|port| responses.get(port)) {
            Some(resp) => BusResponse {
                data: resp.data & self.widths.data_mask(),
                ..*resp
            },
            None => BusResponse::default(),
        }
    }

    /// Requester-visible response for this tick.
    pub fn respond(&self, decode: &Decode, responses: &[BusResponse]) -> BusResponse {
        let mut resp = self.fan_in(decode.selected, responses);
        resp.err |= self.no_match.get();
        resp
    }

    /// Current output of the no-match latch.
    pub fn no_match_error(&self) -> bool {
        self.no_match.get()
    }

    /// Clock edge: sample this tick's decode into the no-match latch.
    pub fn clock(&mut self, decode: &Decode) {
        self.no_match.clock(decode.wire.cyc, decode.selected.is_some());
    }

    pub fn reset(&mut self) {
        self.no_match.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;

    fn router() -> Router {
        let table = RouteTable::new(vec![
            Route::new("exact", 0b0000, 0b1111),
            Route::new("default", 0b0000, 0b0000),
        ])
        .unwrap();
        Router::new(table, BusWidths::new(4, 32)).unwrap()
    }

    fn narrow_router() -> Router {
        let table = RouteTable::new(vec![
            Route::new("low", 0x0, 0x8),
            Route::new("six", 0xC, 0xE),
        ])
        .unwrap();
        Router::new(table, BusWidths::new(4, 32)).unwrap()
    }

    #[test]
    fn test_invalid_widths_rejected() {
        let table = RouteTable::new(vec![Route::new("a", 0, 0)]).unwrap();
        assert!(matches!(
            Router::new(table, BusWidths::new(0, 32)),
            Err(RouterError::InvalidWidths(_))
        ));
    }

    #[test]
    fn test_mask_above_address_width_rejected() {
        let table = RouteTable::new(vec![
            Route::new("low", 0x0, 0x8),
            Route::new("hi", 0x10, 0x10),
        ])
        .unwrap();
        let err = Router::new(table, BusWidths::new(4, 32)).unwrap_err();
        assert!(matches!(
            err,
            RouterError::MaskTooWide { ref route, mask: 0x10, width: 4 } if route == "hi"
        ));
    }

    #[test]
    fn test_decode_scenario() {
        let r = router();
        let d = r.decode(&BusRequest::read(0x0));
        assert_eq!(d.selected, Some(0));
        assert_eq!(d.matches.as_slice(), &[true, true]);

        let d = r.decode(&BusRequest::read(0x5));
        assert_eq!(d.selected, Some(1));
        assert_eq!(d.matches.as_slice(), &[false, true]);
    }

    #[test]
    fn test_address_truncated_before_match() {
        // 0x10 on a 4-bit bus is address 0x0.
        let r = router();
        assert_eq!(r.select(0x10), Some(0));
        let d = r.decode(&BusRequest::read(0x10));
        assert_eq!(d.wire.address, 0x0);
        assert_eq!(d.selected, Some(0));
    }

    #[test]
    fn test_fan_out_gates_only_cyc() {
        let r = router();
        let req = BusRequest {
            cti: 2,
            bte: 1,
            ..BusRequest::write(0x5, 0xAB)
        };
        let ports = r.fan_out(&r.decode(&req));
        assert_eq!(ports.len(), 2);
        assert!(!ports[0].cyc);
        assert!(ports[1].cyc);
        for p in &ports {
            assert_eq!(p.with_cyc(true), req);
        }
    }

    #[test]
    fn test_fan_out_idle_requester() {
        let r = router();
        let ports = r.fan_out(&r.decode(&BusRequest::read(0x0).with_cyc(false)));
        assert!(ports.iter().all(|p| !p.cyc));
        assert!(ports.iter().all(|p| p.stb));
    }

    #[test]
    fn test_fan_out_no_match_drives_nothing() {
        let r = narrow_router();
        let ports = r.fan_out(&r.decode(&BusRequest::read(0x9)));
        assert!(ports.iter().all(|p| !p.cyc));
    }

    #[test]
    fn test_fan_in_selected_port() {
        let r = router();
        let responses = [BusResponse::ack(1), BusResponse::retry()];
        assert_eq!(r.fan_in(Some(0), &responses), BusResponse::ack(1));
        assert_eq!(r.fan_in(Some(1), &responses), BusResponse::retry());
        assert_eq!(r.fan_in(None, &responses), BusResponse::default());
    }

    #[test]
    fn test_no_match_error_is_one_tick_late() {
        let mut r = narrow_router();
        let idle = [BusResponse::default(); 2];
        let miss = r.decode(&BusRequest::read(0x9));

        assert!(!r.respond(&miss, &idle).err);
        r.clock(&miss);
        assert!(r.respond(&miss, &idle).err);
        assert!(r.no_match_error());

        let quiet = r.decode(&BusRequest::idle());
        r.clock(&quiet);
        assert!(!r.respond(&quiet, &idle).err);
    }

    #[test]
    fn test_responder_error_passes_through() {
        let r = router();
        let responses = [BusResponse::error(), BusResponse::default()];
        assert!(r.respond(&r.decode(&BusRequest::read(0x0)), &responses).err);
        assert!(!r.respond(&r.decode(&BusRequest::read(0x5)), &responses).err);
    }

    #[test]
    fn test_reset_clears_latch() {
        let mut r = narrow_router();
        let miss = r.decode(&BusRequest::read(0x9));
        r.clock(&miss);
        assert!(r.no_match_error());
        r.reset();
        assert!(!r.no_match_error());
    }
}
