//! Engine compatibility rule.

use vf_domain::engine::{EngineVariant, list_engine_variants};
use vf_domain::vehicle::{VehicleVariant, list_vehicle_variants};

/// Whether `engine` may be fitted to `vehicle`.
///
/// Motorcycle with Hybrid is the only rejected pair.
#[must_use]
pub const fn is_compatible(vehicle: VehicleVariant, engine: EngineVariant) -> bool {
    !matches!((vehicle, engine), (VehicleVariant::Motorcycle, EngineVariant::Hybrid))
}

/// Engines offered for `vehicle`, in engine catalog order. Never empty.
#[must_use]
pub fn allowed_engines(vehicle: VehicleVariant) -> Vec<EngineVariant> {
    list_engine_variants().into_iter().filter(|&engine| is_compatible(vehicle, engine)).collect()
}

/// Allowed engines for every vehicle, materialized from [`is_compatible`].
///
/// Rows follow the vehicle catalog order; each row follows the engine catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityTable {
    rows: Vec<(VehicleVariant, Vec<EngineVariant>)>,
}

impl CompatibilityTable {
    /// Builds the table for the full vehicle catalog.
    #[must_use]
    pub fn standard() -> Self {
        let rows = list_vehicle_variants()
            .into_iter()
            .map(|vehicle| (vehicle, allowed_engines(vehicle)))
            .collect();
        Self { rows }
    }

    /// Engines offered for `vehicle`.
    #[must_use]
    pub fn engines_for(&self, vehicle: VehicleVariant) -> &[EngineVariant] {
        self.rows
            .iter()
            .find(|(v, _)| *v == vehicle)
            .map(|(_, engines)| engines.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn permits(&self, vehicle: VehicleVariant, engine: EngineVariant) -> bool {
        self.engines_for(vehicle).contains(&engine)
    }

    /// Iterates `(vehicle, engines)` rows in vehicle catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleVariant, &[EngineVariant])> {
        self.rows.iter().map(|(vehicle, engines)| (*vehicle, engines.as_slice()))
    }
}

impl Default for CompatibilityTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EngineVariant::{Electric, Gasoline, Hybrid};
    use VehicleVariant::{Car, Motorcycle, Truck};

    #[test]
    fn motorcycle_excludes_hybrid() {
        assert_eq!(allowed_engines(Motorcycle), vec![Electric, Gasoline]);
        assert!(!is_compatible(Motorcycle, Hybrid));
    }

    #[test]
    fn car_and_truck_accept_every_engine() {
        assert_eq!(allowed_engines(Car), vec![Electric, Gasoline, Hybrid]);
        assert_eq!(allowed_engines(Truck), vec![Electric, Gasoline, Hybrid]);
    }

    #[test]
    fn table_rows_follow_catalog_order() {
        let table = CompatibilityTable::standard();
        let vehicles: Vec<_> = table.iter().map(|(vehicle, _)| vehicle).collect();
        assert_eq!(vehicles, vec![Car, Motorcycle, Truck]);
        assert_eq!(table.engines_for(Motorcycle), &[Electric, Gasoline]);
    }

    #[test]
    fn table_agrees_with_rule() {
        let table = CompatibilityTable::default();
        for vehicle in list_vehicle_variants() {
            for engine in list_engine_variants() {
                assert_eq!(table.permits(vehicle, engine), is_compatible(vehicle, engine));
            }
        }
    }
}
