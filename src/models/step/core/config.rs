use std::path::PathBuf;

use uom::si::f64::{AngularVelocity, Frequency, Length, Velocity};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// The part an executing process plays in a cooperative step.
///
/// Distributed hosts run a step on several cooperating processes at once.
/// Exactly one of them performs side-effecting setup; everyone proceeds to
/// the shared solve phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Writes derived configuration before the shared phase.
    Coordinator,
    /// Skips setup and goes straight to the shared phase.
    Worker,
}

/// Configuration for one pipeline step.
///
/// Carries what the surrounding pipeline knows: where the run lives, which
/// step this is, which cooperating process writes configuration, and the
/// physical parameters the step derives its overrides from.
#[derive(Debug, Clone)]
pub struct StepConfig {
    /// Directory the pipeline runs in; collaborators resolve paths under it.
    pub run_dir: PathBuf,

    /// Index of this step within the pipeline.
    pub step: usize,

    /// Base name for the step's outputs (e.g. the turbine designation).
    pub model_name: String,

    /// Rank of the executing process among cooperating processes.
    pub rank: usize,

    /// Rank designated to write configuration. Exactly one process per run
    /// should carry this rank; hosts without distributed execution use 0/0.
    pub writer_rank: usize,

    /// Transport cap on the tower root outer diameter.
    pub max_tower_diameter: Constrained<Length, StrictlyPositive>,

    /// Lower bound on the tower's first natural frequency.
    pub min_first_tower_frequency: Frequency,

    /// Rotor diameter used to derive the rotational speed bound.
    pub rotor_diameter: Constrained<Length, StrictlyPositive>,

    /// Blade-tip speed limit that caps rotor speed.
    pub tip_speed_limit: Velocity,

    /// Minimum rotor speed override.
    pub min_rotor_speed: Constrained<AngularVelocity, NonNegative>,
}

impl StepConfig {
    /// The part this process plays, per the designated writer rank.
    #[must_use]
    pub fn role(&self) -> Role {
        if self.rank == self.writer_rank {
            Role::Coordinator
        } else {
            Role::Worker
        }
    }
}
