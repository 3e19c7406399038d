//! # Domain Models
//!
//! Pure domain types for the vehicle factory with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no ordering rules here, only the catalogs and configuration shapes.
//!
//! ```rust
//! use vf_domain::engine::{EngineVariant, display_name};
//! use vf_domain::vehicle::{VehicleVariant, describe_template};
//!
//! assert_eq!(display_name(EngineVariant::Hybrid), "Hybrid");
//! assert_eq!(
//!     describe_template(VehicleVariant::Truck, EngineVariant::Hybrid),
//!     "A heavy-duty Truck running on Hybrid."
//! );
//! ```

pub mod config;
pub mod engine;
pub mod vehicle;
