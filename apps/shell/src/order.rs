//! The interactive ordering session.

use crate::error::ShellError;
use crate::menu::select_from_menu;
use crate::render::order_summary;
use crate::shell::Shell;
use std::io::{BufRead, Write};
use tracing::info;
use vf::ordering::{ComposedVehicle, Configurator};

pub const WELCOME_HEADER: &str = "🚗 Welcome to Vehicle Factory Inc. 🚗";
pub const INVALID_CHOICE: &str = "Invalid choice. Press Enter to try again...";
pub const THANK_YOU: &str = "Thank you for your order! Press Enter to return to main menu...";

/// Entries of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Order,
    Exit,
}

impl MainMenuChoice {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Order),
            "2" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the main menu until the customer exits or input ends.
///
/// # Errors
/// Returns terminal I/O failures; end of input is a normal exit.
pub fn run_session<R: BufRead, W: Write>(
    shell: &mut Shell<R, W>,
    configurator: Configurator,
) -> Result<usize, ShellError> {
    let mut completed = 0;

    match main_menu(shell, configurator, &mut completed) {
        Ok(()) => info!(completed, "Customer left the shop"),
        Err(ShellError::InputClosed { .. }) => info!(completed, "Input closed, ending session"),
        Err(err) => return Err(err),
    }

    Ok(completed)
}

fn main_menu<R: BufRead, W: Write>(
    shell: &mut Shell<R, W>,
    configurator: Configurator,
    completed: &mut usize,
) -> Result<(), ShellError> {
    loop {
        shell.clear()?;
        shell.header(WELCOME_HEADER)?;
        shell.line("1. Order a Vehicle")?;
        shell.line("2. Exit")?;

        match MainMenuChoice::parse(&shell.prompt("\nPlease enter choice [1–2]: ")?) {
            Some(MainMenuChoice::Order) => {
                place_order(shell, configurator)?;
                *completed += 1;
            },
            Some(MainMenuChoice::Exit) => return Ok(()),
            None => {
                shell.error(INVALID_CHOICE)?;
                shell.wait()?;
            },
        }
    }
}

/// Walks the vehicle menu, the filtered engine menu and the summary screen.
///
/// # Errors
/// Returns [`ShellError::InputClosed`] if input ends mid-order, and [`ShellError::Order`] if the
/// configurator rejects the pair.
pub fn place_order<R: BufRead, W: Write>(
    shell: &mut Shell<R, W>,
    configurator: Configurator,
) -> Result<ComposedVehicle, ShellError> {
    shell.clear()?;
    shell.header("🔧 Vehicle Selection")?;
    let vehicle =
        select_from_menu(shell, "Select vehicle type:", &configurator.available_vehicle_types())?;

    shell.clear()?;
    shell.header(&format!("🔌 Engine Selection for {vehicle}"))?;
    let engine =
        select_from_menu(shell, "Select engine type:", &configurator.supported_engines(vehicle))?;

    let order = configurator.compose(vehicle, engine)?;
    info!(%vehicle, %engine, "Order completed");

    shell.clear()?;
    shell.header("🎉 Order Summary")?;
    shell.line(&order_summary(&order))?;
    shell.pause(THANK_YOU)?;

    Ok(order)
}
