//! # CLI Argument Definitions
//!
//! Command-line interface of `cargo xtask`, the workspace developer toolkit.

use clap::{Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Vehicle Factory workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List apps, features, shared and infrastructure crates with their descriptions
    Crates {},
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'vf-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'vf-' if missing)
        project: Option<String>,
    },
    /// Run a project
    Run {
        /// Crate to run (auto-prefixes with 'vf-' if missing)
        project: String,

        /// Arguments forwarded to the binary
        #[arg(last = true)]
        args: Vec<String>,
    },
}
