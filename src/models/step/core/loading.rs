use uom::si::f64::{Force, Length, Mass, MomentOfInertia, Torque, Velocity};

/// Rotor-nacelle assembly loading applied at the tower top.
///
/// Carrying the loading explicitly lets a tower-only analysis skip the rotor
/// and drivetrain models entirely. The values come from the previous step's
/// solved state, where the rotor model did run.
#[derive(Debug, Clone, PartialEq)]
pub struct RnaLoading {
    /// Total RNA mass.
    pub mass: Mass,

    /// RNA center of mass relative to the tower top, x/y/z.
    pub center_of_mass: [Length; 3],

    /// RNA moments of inertia: Ixx, Iyy, Izz, Ixy, Ixz, Iyz.
    pub moment_of_inertia: [MomentOfInertia; 6],

    /// Load cases the tower is analyzed under.
    pub cases: Vec<LoadCase>,
}

/// One tower-top load case.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCase {
    /// Applied force, x/y/z.
    pub force: [Force; 3],

    /// Applied moment, x/y/z.
    pub moment: [Torque; 3],

    /// Hub-height wind velocity the loads correspond to, typically rated.
    pub velocity: Velocity,
}
