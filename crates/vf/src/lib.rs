//! Facade crate for the vehicle factory platform.
//! Re-exports the domain, kernel and feature slices used by applications.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ```rust
//! use vf::domain::engine::EngineVariant;
//! use vf::domain::vehicle::VehicleVariant;
//!
//! let order = vf::configurator().compose(VehicleVariant::Car, EngineVariant::Hybrid).unwrap();
//! assert_eq!(order.description(), "A comfortable Car powered by Hybrid.");
//! ```

pub use vf_domain as domain;
pub use vf_kernel as kernel;
pub use vf_ordering as ordering;

/// Feature slices compiled into this build.
pub mod features {
    pub const ENABLED: &[&str] = &["ordering"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The configurator every front end should use to place orders.
#[must_use]
pub const fn configurator() -> ordering::Configurator {
    ordering::Configurator::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_slice_is_enabled() {
        assert!(features::is_enabled("ordering"));
        assert!(!features::is_enabled("billing"));
    }
}
