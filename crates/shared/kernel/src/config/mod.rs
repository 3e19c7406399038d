use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// File looked up in the working directory when no explicit path is given (any supported extension).
pub const DEFAULT_CONFIG_NAME: &str = "vehicle-factory";

/// Prefix of environment overrides, e.g. `VF__UI__COLOR=false`.
pub const ENV_PREFIX: &str = "VF";

const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[vf_derive::vf_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a configuration file overlaid with environment variables.
///
/// Layering, lowest priority first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **File**: `path` when given (must exist), otherwise an optional
///    [`DEFAULT_CONFIG_NAME`] file (`.toml`, `.json`, `.yaml`, …) in the working directory.
/// 3. **Environment**: variables prefixed with `VF__`, nested with `__`
///    (`VF__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use vf_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     color: bool,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(|p| p.as_ref()), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_layered<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path).required(true)
        },
        None => {
            debug!("No config path given, probing for '{DEFAULT_CONFIG_NAME}'");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
