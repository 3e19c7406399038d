use std::borrow::Cow;
use vf_domain::engine::EngineVariant;
use vf_domain::vehicle::VehicleVariant;

/// Error types specific to the ordering slice.
#[vf_derive::vf_error]
pub enum OrderError {
    /// The engine is not offered for the vehicle (see [`crate::allowed_engines`]).
    #[error(
        "Incompatible configuration{}: a {vehicle} cannot be built with a {engine} engine",
        format_context(.context)
    )]
    IncompatiblePair {
        vehicle: VehicleVariant,
        engine: EngineVariant,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal ordering error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
