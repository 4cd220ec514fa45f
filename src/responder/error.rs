//! Responder that terminates every transfer with a bus error.

use crate::bus::{BusRequest, BusResponse};
use crate::responder::Responder;

#[derive(Debug, Clone)]
pub struct ErrorResponder {
    name: String,
}

impl ErrorResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Responder for ErrorResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, req: &BusRequest) -> BusResponse {
        if req.is_strobed() {
            BusResponse::error()
        } else {
            BusResponse::default()
        }
    }

    fn clock(&mut self, _req: &BusRequest) {}
}
