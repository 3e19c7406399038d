use std::borrow::Cow;
use vf::kernel::config::ConfigError;
use vf::ordering::OrderError;
use vf_logger::LoggerError;

/// A specialized [`ShellError`] enum of this crate.
#[vf_derive::vf_error]
pub enum ShellError {
    /// Terminal read or write failure.
    #[error("Terminal I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Order failed{}: {source}", format_context(.context))]
    Order { source: OrderError, context: Option<Cow<'static, str>> },

    #[error("Configuration failed{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logging setup failed{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    /// A configuration value that parsed but makes no sense.
    #[error("Invalid setting{}: {message}", format_context(.context))]
    InvalidSetting { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Standard input reached end of file while waiting for the customer.
    #[error("Input closed{}: {message}", format_context(.context))]
    InputClosed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
