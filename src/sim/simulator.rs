//! Tick-driven simulation of a router and its responders.
//!
//! # Responsibilities
//! - Own the router and one responder per port
//! - Evaluate one tick: fan-out, responder outputs, fan-in, clock edge
//! - Report what the requester observed on each tick
//! - Emit logs and metrics per tick

use serde::Serialize;

use crate::bus::{BusRequest, BusResponse};
use crate::config::validation::validate_config;
use crate::config::{ConfigError, RouterConfig};
use crate::error::{RouterError, RouterResult};
use crate::interconnect::Router;
use crate::observability::metrics;
use crate::responder::{self, Responder};

/// What the requester saw on one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub selected: Option<usize>,
    pub route: Option<String>,
    pub response: BusResponse,
}

#[derive(Debug)]
pub struct Simulator {
    router: Router,
    responders: Vec<Box<dyn Responder>>,
    tick: u64,
}

impl Simulator {
    pub fn new(router: Router, responders: Vec<Box<dyn Responder>>) -> RouterResult<Self> {
        if responders.len() != router.ports() {
            return Err(RouterError::ResponderCountMismatch {
                routes: router.ports(),
                responders: responders.len(),
            });
        }
        Ok(Self {
            router,
            responders,
            tick: 0,
        })
    }

    /// Build the router and the configured responders.
    pub fn from_config(config: &RouterConfig) -> RouterResult<Self> {
        validate_config(config).map_err(|e| RouterError::Config(ConfigError::Validation(e)))?;

        let router = Router::from_config(config)?;
        let responders = config
            .routes
            .iter()
            .map(|route| responder::from_route(route, config.bus.widths()))
            .collect();
        Self::new(router, responders)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Ticks evaluated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Evaluate one tick with `req` on the requester side, then clock.
    pub fn step(&mut self, req: &BusRequest) -> TickReport {
        let decode = self.router.decode(req);
        let ports = self.router.fan_out(&decode);
        let responses: Vec<BusResponse> = self
            .responders
            .iter()
            .zip(&ports)
            .map(|(r, port)| r.respond(port))
            .collect();
        let response = self.router.respond(&decode, &responses);
        let route = decode
            .selected
            .and_then(|i| self.router.table().get(i))
            .map(|r| r.name.clone());

        tracing::trace!(tick = self.tick, address = decode.wire.address, matches = %decode.matches, "Decoded");

        match (decode.selected, decode.wire.cyc) {
            (Some(port), true) => {
                let responder = self.responders[port].name();
                tracing::debug!(
                    tick = self.tick,
                    address = decode.wire.address,
                    route = route.as_deref().unwrap_or_default(),
                    responder = %responder,
                    ack = response.ack,
                    err = response.err,
                    rty = response.rty,
                    "Routed"
                );
                if responses[port].ack {
                    metrics::record_transaction(responder);
                }
                if responses[port].err {
                    metrics::record_bus_error("responder");
                }
            }
            (None, true) => {
                tracing::warn!(tick = self.tick, address = decode.wire.address, "No route matched");
                metrics::record_no_match();
            }
            (_, false) => {}
        }

        if self.router.no_match_error() {
            metrics::record_bus_error("no_match");
        }

        for (r, port) in self.responders.iter_mut().zip(&ports) {
            r.clock(port);
        }
        self.router.clock(&decode);

        let report = TickReport {
            tick: self.tick,
            selected: decode.selected,
            route,
            response,
        };
        self.tick += 1;
        report
    }

    /// Drive a sequence of requests, one per tick.
    pub fn run<I>(&mut self, requests: I) -> Vec<TickReport>
    where
        I: IntoIterator<Item = BusRequest>,
    {
        requests.into_iter().map(|req| self.step(&req)).collect()
    }

    /// Clear the router latch and the tick counter. Responder state is kept.
    pub fn reset(&mut self) {
        self.router.reset();
        self.tick = 0;
    }
}
