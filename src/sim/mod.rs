//! Simulation harness.
//!
//! # Data Flow
//! ```text
//! trace.rs (TOML steps)
//!     → BusRequest per tick
//!     → simulator.rs step
//!         → Router fan-out → Responders → Router fan-in
//!         → clock edge
//!     → TickReport per tick
//! ```

pub mod simulator;
pub mod trace;

pub use simulator::{Simulator, TickReport};
pub use trace::{load_trace, parse_trace, Trace, TraceStep};
