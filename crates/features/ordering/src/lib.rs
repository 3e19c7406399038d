//! # Ordering
//!
//! Turns a customer's two menu choices into a finished vehicle.
//!
//! 1.  **Compatibility ([`compatibility`]):** which engines may be fitted to which vehicle.
//!     A single exclusion rule: motorcycles are never built with a hybrid engine.
//! 2.  **Configuration ([`configurator`]):** composes a compatible pair into a
//!     [`ComposedVehicle`] carrying its rendered description. Incompatible pairs are rejected
//!     with [`OrderError::IncompatiblePair`] instead of producing a misleading description.
//!
//! ```rust
//! use vf_ordering::domain::engine::EngineVariant;
//! use vf_ordering::domain::vehicle::VehicleVariant;
//! use vf_ordering::{Configurator, OrderError};
//!
//! let configurator = Configurator::new();
//! let order = configurator.compose(VehicleVariant::Car, EngineVariant::Electric)?;
//! assert_eq!(order.description(), "A comfortable Car powered by Electric.");
//!
//! let rejected = configurator.compose(VehicleVariant::Motorcycle, EngineVariant::Hybrid);
//! assert!(matches!(rejected, Err(OrderError::IncompatiblePair { .. })));
//! # Ok::<(), OrderError>(())
//! ```

pub mod compatibility;
pub mod configurator;
mod error;

pub use crate::compatibility::{CompatibilityTable, allowed_engines, is_compatible};
pub use crate::configurator::{ComposedVehicle, Configurator, compose};
pub use crate::error::{OrderError, OrderErrorExt};
pub use vf_domain as domain;
