use vf_domain::engine::{EngineVariant, display_name, list_engine_variants};
use vf_domain::vehicle::{VehicleVariant, describe_template, list_vehicle_variants};

#[test]
fn every_template_mentions_its_vehicle_and_engine() {
    for vehicle in list_vehicle_variants() {
        for engine in list_engine_variants() {
            let sentence = describe_template(vehicle, engine);
            assert!(sentence.contains(vehicle.name()), "{sentence}");
            assert!(sentence.contains(display_name(engine)), "{sentence}");
            assert!(sentence.ends_with('.'), "{sentence}");
        }
    }
}

#[test]
fn names_round_trip_through_display() {
    for vehicle in list_vehicle_variants() {
        assert_eq!(vehicle.to_string().parse::<VehicleVariant>(), Ok(vehicle));
    }
    for engine in list_engine_variants() {
        assert_eq!(engine.to_string().parse::<EngineVariant>(), Ok(engine));
    }
}
