//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use bus_router::bus::{BusRequest, BusResponse};
use bus_router::responder::Responder;

/// Port requests a responder saw, one entry per tick.
pub type Seen = Arc<Mutex<Vec<BusRequest>>>;

/// Responder that answers every active strobe with a fixed response and
/// records every port request it is clocked with.
#[derive(Debug)]
pub struct ScriptedResponder {
    name: String,
    reply: BusResponse,
    seen: Seen,
}

impl ScriptedResponder {
    pub fn new(name: &str, reply: BusResponse) -> (Self, Seen) {
        let seen = Seen::default();
        (
            Self {
                name: name.to_string(),
                reply,
                seen: seen.clone(),
            },
            seen,
        )
    }
}

impl Responder for ScriptedResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, req: &BusRequest) -> BusResponse {
        if req.is_strobed() {
            self.reply
        } else {
            BusResponse::default()
        }
    }

    fn clock(&mut self, req: &BusRequest) {
        self.seen.lock().unwrap().push(*req);
    }
}

/// Build `n` scripted responders that ack with their own index as data.
#[allow(dead_code)]
pub fn scripted_ports(n: usize) -> (Vec<Box<dyn Responder>>, Vec<Seen>) {
    (0..n)
        .map(|i| {
            let (r, seen) = ScriptedResponder::new(&format!("port{}", i), BusResponse::ack(i as u64));
            (Box::new(r) as Box<dyn Responder>, seen)
        })
        .unzip()
}
