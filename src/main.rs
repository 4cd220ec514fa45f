//! Address-decoding bus router (v1)
//!
//! Command-line front end for the router model: validates route tables,
//! decodes single addresses, and replays requester traces tick by tick.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                  ROUTER                     │
//!   Requester        │  ┌──────────┐   ┌──────────┐               │
//!   ─────────────────┼─▶│ routing  │──▶│ fan-out  │──┬──────────▶ │──▶ Responder 0
//!     BusRequest     │  │ match +  │   │ cyc gate │  ├──────────▶ │──▶ Responder 1
//!                    │  │ priority │   └──────────┘  └──────────▶ │──▶ Responder N-1
//!                    │  └──────────┘                              │
//!   ◀────────────────┼── fan-in (selected) | no-match latch ◀──── │◀── BusResponse × N
//!     BusResponse    │                                            │
//!                    └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bus_router::bus::BusRequest;
use bus_router::config::{load_config, validation::shadowed_routes, warn_shadowed_routes, RouterConfig};
use bus_router::observability::{logging, metrics};
use bus_router::sim::{load_trace, Simulator, TickReport};
use bus_router::Router;

#[derive(Parser)]
#[command(name = "bus-router")]
#[command(about = "Address-decoding bus router model", long_about = None)]
struct Cli {
    /// Log level; overrides the config file. `RUST_LOG` overrides both.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a router config and print its route table
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Decode one address against the route table
    Route {
        #[arg(short, long)]
        config: PathBuf,

        /// Address, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_address)]
        address: u64,
    },
    /// Replay a requester trace tick by tick
    Run {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long)]
        trace: PathBuf,

        /// Print one JSON object per tick
        #[arg(long)]
        json: bool,

        /// Print Prometheus metrics after the run
        #[arg(long)]
        metrics: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let config = load(&config, cli.log_level.as_deref())?;
            print_table(&config);
        }
        Commands::Route { config, address } => {
            let config = load(&config, cli.log_level.as_deref())?;
            let router = Router::from_config(&config)?;
            let decode = router.decode(&BusRequest::read(address));
            println!("address {:#x}", decode.wire.address);
            println!("matches {}", decode.matches);
            match decode
                .selected
                .and_then(|i| router.table().get(i).map(|r| (i, r)))
            {
                Some((index, route)) => println!(
                    "selected #{} {} pattern={:#x} mask={:#x}",
                    index,
                    route.name,
                    route.matcher.pattern(),
                    route.matcher.mask()
                ),
                None => println!("selected none (no-match error on next tick)"),
            }
        }
        Commands::Run {
            config,
            trace,
            json,
            metrics: print_metrics,
        } => {
            let config = load(&config, cli.log_level.as_deref())?;
            let trace = load_trace(&trace)?;

            let handle = if print_metrics || config.observability.metrics_enabled {
                Some(metrics::init_metrics()?)
            } else {
                None
            };

            let mut sim = Simulator::from_config(&config)?;
            tracing::info!(routes = config.routes.len(), ticks = trace.ticks(), "Replaying trace");

            for req in trace.requests() {
                let report = sim.step(&req);
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    print_report(&report);
                }
            }

            if print_metrics {
                if let Some(handle) = handle {
                    print!("{}", handle.render());
                }
            }
        }
    }

    Ok(())
}

fn load(path: &std::path::Path, level: Option<&str>) -> Result<RouterConfig, Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    logging::init_logging(level.unwrap_or(&config.observability.log_level));
    tracing::info!(
        path = %path.display(),
        address_width = config.bus.address_width,
        data_width = config.bus.data_width,
        routes = config.routes.len(),
        "Configuration loaded"
    );
    warn_shadowed_routes(&config);
    Ok(config)
}

fn print_table(config: &RouterConfig) {
    println!(
        "bus: {}-bit address, {}-bit data",
        config.bus.address_width, config.bus.data_width
    );
    for (i, route) in config.routes.iter().enumerate() {
        println!(
            "#{:<3} {:<16} pattern={:#x} mask={:#x} responder={:?}",
            i, route.name, route.pattern, route.mask, route.responder
        );
    }
    for (earlier, later) in shadowed_routes(config) {
        println!("warning: '{}' is shadowed by '{}' and can never be selected", later, earlier);
    }
}

fn print_report(report: &TickReport) {
    let r = &report.response;
    println!(
        "tick {:>5}  route={:<12} ack={} err={} rty={} data={:#x}",
        report.tick,
        report.route.as_deref().unwrap_or("-"),
        r.ack as u8,
        r.err as u8,
        r.rty as u8,
        r.data
    );
}

fn parse_address(s: &str) -> Result<u64, String> {
    let cleaned = s.replace('_', "");
    let parsed = match cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}
