//! # Vehicle Factory Shell
//!
//! Terminal front end of the vehicle factory: numbered menus for choosing a vehicle and a
//! compatible engine, followed by an order summary.
//!
//! ## Example
//! ```no_run
//! use clap::Parser;
//! use vf_shell::args::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse();
//!     let settings = vf_shell::load_settings(&cli)?;
//!     let _logger = vf_shell::init_logging(&cli, &settings)?;
//!     vf_shell::run(&cli, &settings)?;
//!     Ok(())
//! }
//! ```

pub mod args;
mod error;
pub mod menu;
pub mod order;
pub mod render;
pub mod shell;

pub use crate::error::{ShellError, ShellErrorExt};

use crate::args::{Cli, Command};
use crate::shell::{Shell, ShellOptions};
use std::io::{self, BufRead, Write};
use tracing::info;
use vf::domain::config::ShellConfig;
use vf::kernel::config::load_config;
use vf::ordering::CompatibilityTable;
use vf_logger::{LevelFilter, Logger};

/// Name used for log files and diagnostics.
pub const APP_NAME: &str = "vehicle-factory";

/// Loads the shell configuration from `--config` (or the default file) and `VF__*` variables.
///
/// # Errors
/// Returns [`ShellError::Config`] when the configuration cannot be read or parsed.
pub fn load_settings(cli: &Cli) -> Result<ShellConfig, ShellError> {
    load_config::<ShellConfig>(cli.config.as_deref()).context("Loading shell settings")
}

/// Installs the global subscriber according to `--log-level` and the `logging` section.
///
/// # Errors
/// Returns [`ShellError::InvalidSetting`] for an unknown level and [`ShellError::Logger`] when
/// the subscriber cannot be installed.
pub fn init_logging(cli: &Cli, settings: &ShellConfig) -> Result<Logger, ShellError> {
    let level = match cli.log_level {
        Some(level) => level,
        None => settings.logging.level.parse::<LevelFilter>().map_err(|e| {
            ShellError::InvalidSetting {
                message: format!("logging.level '{}': {e}", settings.logging.level).into(),
                context: None,
            }
        })?,
    };

    let builder = Logger::builder()
        .name(APP_NAME)
        .console(true)
        .ansi(log_colors(cli, settings, console::colors_enabled_stderr()))
        .level(level);
    let logger = match &settings.logging.directory {
        Some(directory) if settings.logging.json => builder.path(directory).json().init(),
        Some(directory) => builder.path(directory).init(),
        None => builder.init(),
    };

    logger.context("Initializing logging")
}

/// Whether stderr log lines may carry ANSI colors.
#[must_use]
pub const fn log_colors(cli: &Cli, settings: &ShellConfig, stderr_colors: bool) -> bool {
    stderr_colors && settings.ui.color && !cli.no_color
}

/// Resolves presentation switches for the current terminal.
#[must_use]
pub fn shell_options(cli: &Cli, settings: &ShellConfig) -> ShellOptions {
    let stdout = console::Term::stdout();
    ShellOptions {
        color: settings.ui.color && !cli.no_color && console::colors_enabled(),
        clear_screen: settings.ui.clear_screen && stdout.is_term(),
    }
}

/// Runs the selected command against the process's stdin and stdout.
///
/// # Errors
/// Propagates terminal failures and rejected one-shot orders.
pub fn run(cli: &Cli, settings: &ShellConfig) -> Result<(), ShellError> {
    let options = shell_options(cli, settings);
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_command(&cli.command(), options, stdin.lock(), stdout.lock())
}

/// Runs `command` over arbitrary input and output streams.
///
/// # Errors
/// Propagates terminal failures and rejected one-shot orders.
pub fn run_command<R: BufRead, W: Write>(
    command: &Command,
    options: ShellOptions,
    input: R,
    mut output: W,
) -> Result<(), ShellError> {
    let configurator = vf::configurator();

    match command {
        Command::Shop => {
            info!(features = ?vf::features::ENABLED, "Shop opened");
            let mut shell = Shell::new(input, output, options);
            let completed = order::run_session(&mut shell, configurator)?;
            info!(completed, "Shop closed");
        },
        Command::Order { vehicle, engine } => {
            let order = configurator.compose(*vehicle, *engine).context("One-shot order")?;
            info!(%vehicle, %engine, "Order completed");
            write!(output, "{}", render::order_summary(&order))
                .and_then(|()| output.flush())
                .context("Writing the summary")?;
        },
        Command::Catalog => {
            let table = CompatibilityTable::standard();
            write!(output, "{}", render::catalog(&table))
                .and_then(|()| output.flush())
                .context("Writing the catalog")?;
        },
    }

    Ok(())
}
