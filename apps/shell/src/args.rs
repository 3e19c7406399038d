//! # CLI Argument Definitions
//!
//! Command-line interface of the `vehicle-factory` binary, built with `clap`.

use std::path::PathBuf;
use vf::domain::engine::EngineVariant;
use vf::domain::vehicle::VehicleVariant;
use vf_logger::LevelFilter;

use clap::{Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "vehicle-factory")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Order a vehicle from Vehicle Factory Inc.")]
pub struct Cli {
    /// Configuration file (defaults to ./vehicle-factory.{toml,json,yaml} when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// What to do; the interactive shop when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The selected command, falling back to the interactive shop.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shop)
    }
}

/// Enumeration of available subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Walk through the interactive ordering menus
    Shop,
    /// Place a single order without menus
    Order {
        /// Vehicle type (car, motorcycle, truck)
        #[arg(short, long)]
        vehicle: VehicleVariant,

        /// Engine type (electric, gasoline, hybrid)
        #[arg(short, long)]
        engine: EngineVariant,
    },
    /// Print which engines are offered for each vehicle
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_shop() {
        let cli = Cli::try_parse_from(["vehicle-factory"]).unwrap();
        assert_eq!(cli.command(), Command::Shop);
        assert!(!cli.no_color);
        assert!(cli.config.is_none());
    }

    #[test]
    fn order_parses_variants_case_insensitively() {
        let cli = Cli::try_parse_from([
            "vehicle-factory",
            "order",
            "--vehicle",
            "truck",
            "--engine",
            "HYBRID",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(
            cli.command(),
            Command::Order { vehicle: VehicleVariant::Truck, engine: EngineVariant::Hybrid }
        );
        assert_eq!(cli.log_level, Some(LevelFilter::DEBUG));
    }

    #[test]
    fn unknown_vehicle_is_rejected() {
        let result =
            Cli::try_parse_from(["vehicle-factory", "order", "-v", "boat", "-e", "electric"]);
        assert!(result.is_err());
    }
}
