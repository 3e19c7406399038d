//! Line-based terminal plumbing: styled headers and errors, prompts and pauses.

use crate::error::{ShellError, ShellErrorExt};
use console::{Style, measure_text_width};
use std::io::{BufRead, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
const UNDERLINE: char = '─';

/// Presentation switches resolved from configuration, flags and the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub color: bool,
    pub clear_screen: bool,
}

impl ShellOptions {
    /// Plain output: no colors, no screen clearing.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false, clear_screen: false }
    }
}

/// Terminal session over any line reader and writer.
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    output: W,
    header_style: Style,
    error_style: Style,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            header_style: Style::new().cyan().force_styling(options.color),
            error_style: Style::new().red().force_styling(options.color),
            clear_screen: options.clear_screen,
        }
    }

    /// Consumes the shell and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Starts a new screen.
    pub fn clear(&mut self) -> Result<(), ShellError> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}").context("Clearing the screen")?;
        }
        Ok(())
    }

    /// Writes `text` in the header style, underlined to its display width.
    pub fn header(&mut self, text: &str) -> Result<(), ShellError> {
        let underline = UNDERLINE.to_string().repeat(measure_text_width(text));
        writeln!(self.output, "{}", self.header_style.apply_to(text))
            .and_then(|()| writeln!(self.output, "{}", self.header_style.apply_to(underline)))
            .context("Writing a header")
    }

    /// Writes a blank line followed by `message` in the error style.
    pub fn error(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.output, "\n{}", self.error_style.apply_to(message)).context("Writing an error")
    }

    pub fn line(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{text}").context("Writing output")
    }

    /// Writes `prompt` without a newline and reads one line of input, newline stripped.
    ///
    /// # Errors
    /// Returns [`ShellError::InputClosed`] at end of input.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}").and_then(|()| self.output.flush()).context("Writing a prompt")?;
        self.read_line()
    }

    /// Shows `message` and waits for the customer to press Enter.
    pub fn pause(&mut self, message: &str) -> Result<(), ShellError> {
        self.line(message)?;
        self.wait()
    }

    /// Waits for the customer to press Enter.
    pub fn wait(&mut self) -> Result<(), ShellError> {
        self.output.flush().context("Flushing output")?;
        self.read_line().map(drop)
    }

    /// Undecodable bytes become U+FFFD, so menus reject them like any other bad choice.
    fn read_line(&mut self) -> Result<String, ShellError> {
        let mut bytes = Vec::new();
        let read = self.input.read_until(b'\n', &mut bytes).context("Reading input")?;
        if read == 0 {
            return Err(ShellError::InputClosed {
                message: "no more input from the terminal".into(),
                context: None,
            });
        }
        Ok(String::from_utf8_lossy(&bytes).trim_end_matches(['\r', '\n']).to_owned())
    }
}
