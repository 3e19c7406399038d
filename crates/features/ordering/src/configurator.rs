//! Composition of a vehicle with an engine.

use crate::compatibility::{allowed_engines, is_compatible};
use crate::error::OrderError;
use std::fmt;
use tracing::{debug, instrument, warn};
use vf_domain::engine::EngineVariant;
use vf_domain::vehicle::{VehicleVariant, describe_template, list_vehicle_variants};

/// A vehicle fitted with a compatible engine, ready to be shown in an order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedVehicle {
    vehicle: VehicleVariant,
    engine: EngineVariant,
    description: String,
}

impl ComposedVehicle {
    #[must_use]
    pub const fn vehicle(&self) -> VehicleVariant {
        self.vehicle
    }

    #[must_use]
    pub const fn engine(&self) -> EngineVariant {
        self.engine
    }

    /// Narrative sentence, e.g. "A nimble Motorcycle with a Gasoline engine.".
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ComposedVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Composes `vehicle` with `engine`.
///
/// Deterministic and side-effect free apart from diagnostics.
///
/// # Errors
/// Returns [`OrderError::IncompatiblePair`] when `engine` is not in
/// [`allowed_engines(vehicle)`](crate::allowed_engines).
pub fn compose(vehicle: VehicleVariant, engine: EngineVariant) -> Result<ComposedVehicle, OrderError> {
    if !is_compatible(vehicle, engine) {
        warn!(%vehicle, %engine, "Rejected incompatible vehicle/engine pair");
        return Err(OrderError::IncompatiblePair { vehicle, engine, context: None });
    }

    let description = describe_template(vehicle, engine);
    debug!(%vehicle, %engine, "Vehicle composed");

    Ok(ComposedVehicle { vehicle, engine, description })
}

/// Entry point used by front ends: lists the menus and composes the final pairing.
///
/// Stateless; copies are free.
#[derive(Debug, Default, Clone, Copy)]
pub struct Configurator;

impl Configurator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Vehicle menu, in catalog order.
    #[must_use]
    pub fn available_vehicle_types(&self) -> Vec<VehicleVariant> {
        list_vehicle_variants()
    }

    /// Engine menu for `vehicle`, already filtered by the compatibility rule.
    #[must_use]
    pub fn supported_engines(&self, vehicle: VehicleVariant) -> Vec<EngineVariant> {
        allowed_engines(vehicle)
    }

    /// Composes the final pairing.
    ///
    /// # Errors
    /// Returns [`OrderError::IncompatiblePair`] for an engine outside
    /// [`Configurator::supported_engines`].
    #[instrument(level = "debug", skip(self))]
    pub fn compose(
        &self,
        vehicle: VehicleVariant,
        engine: EngineVariant,
    ) -> Result<ComposedVehicle, OrderError> {
        compose(vehicle, engine)
    }
}
