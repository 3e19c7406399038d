//! Plain-text renderings shared by the interactive and one-shot commands.

use vf::ordering::{CompatibilityTable, ComposedVehicle};

/// The three summary lines of a completed order.
#[must_use]
pub fn order_summary(order: &ComposedVehicle) -> String {
    format!(
        "Vehicle:  {}\nEngine:   {}\nDetails:  {}\n",
        order.vehicle(),
        order.engine(),
        order.description()
    )
}

/// One line per vehicle listing the engines it can be ordered with.
#[must_use]
pub fn catalog(table: &CompatibilityTable) -> String {
    table
        .iter()
        .map(|(vehicle, engines)| {
            let engines = engines.iter().map(|e| e.name()).collect::<Vec<_>>().join(", ");
            format!("{:<12} {engines}\n", vehicle.name())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf::domain::engine::EngineVariant;
    use vf::domain::vehicle::VehicleVariant;

    #[test]
    fn summary_lists_vehicle_engine_and_details() {
        let order = vf::ordering::compose(VehicleVariant::Car, EngineVariant::Electric).unwrap();
        assert_eq!(
            order_summary(&order),
            "Vehicle:  Car\nEngine:   Electric\nDetails:  A comfortable Car powered by Electric.\n"
        );
    }

    #[test]
    fn catalog_lists_every_vehicle() {
        let text = catalog(&CompatibilityTable::standard());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Car          Electric, Gasoline, Hybrid");
        assert_eq!(lines[1], "Motorcycle   Electric, Gasoline");
        assert_eq!(lines[2], "Truck        Electric, Gasoline, Hybrid");
        assert!(text.ends_with("Hybrid\n"));
    }
}
