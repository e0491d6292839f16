use uom::si::f64::{AngularVelocity, Length};

/// Parameter overrides handed to the external solver.
///
/// Overrides replace values in the persisted model document without editing
/// the document itself. Keying them into the solver's own parameter names
/// and formats is a collaborator concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Overrides {
    /// Tower outer diameter at each station of the model's profile grid.
    pub tower_outer_diameter: Vec<Length>,

    /// Minimum rotor rotational speed.
    pub min_rotor_speed: AngularVelocity,

    /// Maximum rotor rotational speed.
    pub max_rotor_speed: AngularVelocity,
}
