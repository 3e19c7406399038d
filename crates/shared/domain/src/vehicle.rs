//! Vehicle catalog and the narrative templates used in order summaries.

use crate::engine::{EngineVariant, display_name};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Vehicle kinds orderable by a customer, in catalog order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum VehicleVariant {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleVariant {
    /// Customer-facing name of the vehicle.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Every vehicle variant in catalog order: Car, Motorcycle, Truck.
#[must_use]
pub fn list_vehicle_variants() -> Vec<VehicleVariant> {
    VehicleVariant::iter().collect()
}

/// Renders the description sentence of `vehicle` fitted with `engine`.
///
/// Total over every pair; compatibility is enforced by the ordering layer, not here.
#[must_use]
pub fn describe_template(vehicle: VehicleVariant, engine: EngineVariant) -> String {
    let engine = display_name(engine);
    match vehicle {
        VehicleVariant::Car => format!("A comfortable Car powered by {engine}."),
        VehicleVariant::Motorcycle => format!("A nimble Motorcycle with a {engine} engine."),
        VehicleVariant::Truck => format!("A heavy-duty Truck running on {engine}."),
    }
}
