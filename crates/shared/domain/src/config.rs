use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the interactive shell.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Terminal presentation knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Cyan headers and red errors. Ignored when stdout is not a terminal.
    pub color: bool,
    /// Clear the screen before every menu. Ignored when stdout is not a terminal.
    pub clear_screen: bool,
}

/// Diagnostics written through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true, clear_screen: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}
