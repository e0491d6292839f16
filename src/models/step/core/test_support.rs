use std::cell::RefCell;
use std::path::PathBuf;

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Force, Frequency, Length, Mass, MomentOfInertia, Torque, Velocity},
    force::newton,
    frequency::hertz,
    length::meter,
    mass::kilogram,
    moment_of_inertia::kilogram_square_meter,
    torque::newton_meter,
    velocity::meter_per_second,
};

use crate::models::tower::DiameterProfile;
use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{
    config::StepConfig,
    loading::{LoadCase, RnaLoading},
    options::{AnalysisOptions, ModelingOptions},
    overrides::Overrides,
    traits::{ModelArchive, OptionsStore, Solver},
};

#[derive(Debug, Error)]
#[error("fake collaborator failure")]
pub(super) struct FakeFailure;

/// A step configuration matching the tower-mass-minimization scenario:
/// 4 m transport cap, 0.271 Hz frequency bound, 85 m/s tip limit on a
/// 103 m rotor.
pub(super) fn config_for_rank(rank: usize) -> StepConfig {
    StepConfig {
        run_dir: PathBuf::from("."),
        step: 6,
        model_name: "NREL-1p7-103".into(),
        rank,
        writer_rank: 0,
        max_tower_diameter: StrictlyPositive::new(Length::new::<meter>(4.0)).unwrap(),
        min_first_tower_frequency: Frequency::new::<hertz>(0.271),
        rotor_diameter: StrictlyPositive::new(Length::new::<meter>(103.0)).unwrap(),
        tip_speed_limit: Velocity::new::<meter_per_second>(85.0),
        min_rotor_speed: NonNegative::new(AngularVelocity::new::<radian_per_second>(0.0)).unwrap(),
    }
}

pub(super) fn rna_loading() -> RnaLoading {
    RnaLoading {
        mass: Mass::new::<kilogram>(95_000.0),
        center_of_mass: [
            Length::new::<meter>(-1.5),
            Length::new::<meter>(0.0),
            Length::new::<meter>(2.2),
        ],
        moment_of_inertia: [
            MomentOfInertia::new::<kilogram_square_meter>(2.1e7),
            MomentOfInertia::new::<kilogram_square_meter>(1.3e7),
            MomentOfInertia::new::<kilogram_square_meter>(1.2e7),
            MomentOfInertia::new::<kilogram_square_meter>(0.0),
            MomentOfInertia::new::<kilogram_square_meter>(5.0e5),
            MomentOfInertia::new::<kilogram_square_meter>(0.0),
        ],
        cases: vec![LoadCase {
            force: [
                Force::new::<newton>(7.0e5),
                Force::new::<newton>(0.0),
                Force::new::<newton>(-9.3e5),
            ],
            moment: [
                Torque::new::<newton_meter>(2.5e6),
                Torque::new::<newton_meter>(1.1e6),
                Torque::new::<newton_meter>(-3.0e5),
            ],
            velocity: Velocity::new::<meter_per_second>(10.8),
        }],
    }
}

pub(super) fn archive_profile() -> DiameterProfile {
    DiameterProfile::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        [6.0, 5.0, 4.0, 3.0, 2.0]
            .iter()
            .map(|&d| Length::new::<meter>(d))
            .collect(),
    )
    .unwrap()
}

pub(super) struct FakeArchive {
    pub(super) profile: DiameterProfile,
    pub(super) fail_profile: bool,
    pub(super) fail_loading: bool,
}

impl FakeArchive {
    pub(super) fn new() -> Self {
        Self {
            profile: archive_profile(),
            fail_profile: false,
            fail_loading: false,
        }
    }
}

impl ModelArchive for FakeArchive {
    type Error = FakeFailure;

    fn tower_diameter_profile(&self) -> Result<DiameterProfile, Self::Error> {
        if self.fail_profile {
            return Err(FakeFailure);
        }
        Ok(self.profile.clone())
    }

    fn rna_loading(&self) -> Result<RnaLoading, Self::Error> {
        if self.fail_loading {
            return Err(FakeFailure);
        }
        Ok(rna_loading())
    }
}

#[derive(Default)]
pub(super) struct FakeOptionsStore {
    pub(super) analysis: Option<AnalysisOptions>,
    pub(super) modeling: Option<ModelingOptions>,
}

impl OptionsStore for FakeOptionsStore {
    type Error = FakeFailure;

    fn write_analysis(&mut self, options: &AnalysisOptions) -> Result<(), Self::Error> {
        self.analysis = Some(options.clone());
        Ok(())
    }

    fn write_modeling(&mut self, options: &ModelingOptions) -> Result<(), Self::Error> {
        self.modeling = Some(options.clone());
        Ok(())
    }
}

pub(super) struct FakeSolver {
    pub(super) seen: RefCell<Option<Overrides>>,
    pub(super) fail: bool,
}

impl FakeSolver {
    pub(super) fn succeeding() -> Self {
        Self {
            seen: RefCell::new(None),
            fail: false,
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            seen: RefCell::new(None),
            fail: true,
        }
    }
}

impl Solver for FakeSolver {
    type Output = u32;
    type Error = FakeFailure;

    fn run(&self, overrides: &Overrides) -> Result<Self::Output, Self::Error> {
        *self.seen.borrow_mut() = Some(overrides.clone());
        if self.fail { Err(FakeFailure) } else { Ok(42) }
    }
}
