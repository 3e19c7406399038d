//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use vf_kernel::config::load_config;
//! use vf_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(!cfg.logging.level.is_empty());
//! ```
pub mod config;

pub use vf_domain as domain;
