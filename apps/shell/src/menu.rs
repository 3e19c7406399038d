//! Numbered menus.

use crate::error::ShellError;
use crate::shell::Shell;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub const INVALID_SELECTION: &str = "Invalid selection, please try again.";

/// Parses a 1-based menu choice into a 0-based index, `None` unless it lies in `[1, count]`.
#[must_use]
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|choice| (1..=count).contains(choice)).map(|c| c - 1)
}

/// Renders `options` under `prompt` and re-prompts until a valid number is entered.
///
/// # Errors
/// Returns [`ShellError::InputClosed`] if input ends before a valid choice.
pub fn select_from_menu<R, W, T>(
    shell: &mut Shell<R, W>,
    prompt: &str,
    options: &[T],
) -> Result<T, ShellError>
where
    R: BufRead,
    W: Write,
    T: Display + Copy,
{
    loop {
        shell.line(prompt)?;
        for (index, option) in options.iter().enumerate() {
            shell.line(&format!("{}. {option}", index + 1))?;
        }

        let answer = shell.prompt(&format!("\nEnter choice [1–{}]: ", options.len()))?;
        if let Some(index) = parse_selection(&answer, options.len()) {
            return Ok(options[index]);
        }

        tracing::debug!(answer = %answer, "Rejected menu input");
        shell.error(&format!("{INVALID_SELECTION}\n"))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellOptions;
    use std::io::Cursor;

    #[test]
    fn selection_must_be_in_range() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 ", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("two", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }

    #[test]
    fn menu_reprompts_until_valid() {
        let input = Cursor::new(b"9\nabc\n2\n".to_vec());
        let mut shell = Shell::new(input, Vec::new(), ShellOptions::plain());

        let picked = select_from_menu(&mut shell, "Pick:", &["red", "blue"]).unwrap();
        assert_eq!(picked, "blue");

        let out = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(out.matches("Pick:\n1. red\n2. blue\n").count(), 3);
        assert_eq!(out.matches(INVALID_SELECTION).count(), 2);
        assert!(out.contains("Enter choice [1–2]: "));
    }

    #[test]
    fn menu_gives_up_when_input_ends() {
        let input = Cursor::new(b"7\n".to_vec());
        let mut shell = Shell::new(input, Vec::new(), ShellOptions::plain());

        let err = select_from_menu(&mut shell, "Pick:", &[1, 2]).unwrap_err();
        assert!(matches!(err, ShellError::InputClosed { .. }));
    }
}
