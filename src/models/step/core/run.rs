//! Step entry point.

use twine_core::Model;

use crate::models::tower::{DiameterAnomaly, TowerRescale};
use crate::support::rotor;

use super::{
    config::{Role, StepConfig},
    error::StepError,
    options::{AnalysisOptions, ModelingOptions, OutputNaming},
    overrides::Overrides,
    traits::{ModelArchive, OptionsStore, Solver},
};

/// What a completed step produced, beyond the solver's own output files.
#[derive(Debug, Clone)]
pub struct StepReport<T> {
    /// Overrides handed to the solver.
    pub overrides: Overrides,

    /// Advisory findings about the rescaled tower profile. Non-empty
    /// anomalies do not fail the step; callers decide whether to warn.
    pub anomalies: Vec<DiameterAnomaly>,

    /// The solver's output.
    pub output: T,
}

/// Runs one pipeline step through the given collaborators.
///
/// The coordinator (the process whose rank matches the configured writer
/// rank) derives and writes analysis and modeling options first. Every
/// process then reads the tower profile, rescales it to the transport cap,
/// assembles overrides, and invokes the solver. This keeps configuration
/// single-writer while the expensive solve phase runs on every process.
///
/// # Errors
///
/// Returns a [`StepError`] if a collaborator fails or the tower profile is
/// degenerate.
pub fn run_step<A, W, S>(
    config: &StepConfig,
    archive: &A,
    options: &mut W,
    solver: &S,
) -> Result<StepReport<S::Output>, StepError>
where
    A: ModelArchive,
    W: OptionsStore,
    S: Solver,
{
    if config.role() == Role::Coordinator {
        let loading = archive
            .rna_loading()
            .map_err(|e| StepError::archive("RNA loading", e))?;

        let analysis = AnalysisOptions::tower_mass_minimization(
            OutputNaming::for_step(&config.model_name, config.step),
            config.max_tower_diameter,
            config.min_first_tower_frequency,
        );
        options
            .write_analysis(&analysis)
            .map_err(|e| StepError::options_write("analysis options", e))?;

        let modeling = ModelingOptions::tower_only(loading);
        options
            .write_modeling(&modeling)
            .map_err(|e| StepError::options_write("modeling options", e))?;
    }

    let profile = archive
        .tower_diameter_profile()
        .map_err(|e| StepError::archive("tower diameter profile", e))?;

    let rescaled = TowerRescale::new(config.max_tower_diameter).call(&profile)?;
    let anomalies = rescaled.anomalies();

    let overrides = Overrides {
        tower_outer_diameter: rescaled.diameters().to_vec(),
        min_rotor_speed: config.min_rotor_speed.into_inner(),
        max_rotor_speed: rotor::speed_for_tip_limit(config.tip_speed_limit, config.rotor_diameter),
    };

    let output = solver.run(&overrides).map_err(|e| StepError::solver(e))?;

    Ok(StepReport {
        overrides,
        anomalies,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::radian_per_second, f64::Length, length::meter};

    use crate::models::step::core::options::MeritFigure;
    use crate::models::step::core::test_support::{
        FakeArchive, FakeOptionsStore, FakeSolver, config_for_rank, rna_loading,
    };
    use crate::models::tower::{DiameterProfile, RescaleError};

    #[test]
    fn coordinator_writes_options_and_solves() {
        let config = config_for_rank(0);
        let archive = FakeArchive::new();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let report = run_step(&config, &archive, &mut store, &solver).unwrap();
        assert_eq!(report.output, 42);

        let analysis = store.analysis.expect("coordinator must write analysis options");
        assert_eq!(analysis.merit_figure, MeritFigure::TowerMass);
        assert_eq!(analysis.output.folder, "outputs.6");
        assert_eq!(analysis.output.file_stem, "NREL-1p7-103-step6");
        assert_eq!(
            analysis.tower.outer_diameter_upper_bound,
            Some(Length::new::<meter>(4.0))
        );

        let modeling = store.modeling.expect("coordinator must write modeling options");
        assert!(!modeling.rotor);
        assert!(!modeling.drivetrain);
        assert_eq!(modeling.tower_load_cases, 1);
        assert_eq!(modeling.loading, rna_loading());
    }

    #[test]
    fn overrides_carry_rescaled_profile_and_speed_bounds() {
        let config = config_for_rank(0);
        let archive = FakeArchive::new();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let report = run_step(&config, &archive, &mut store, &solver).unwrap();

        let expected = [4.0, 10.0 / 3.0, 8.0 / 3.0, 7.0 / 3.0, 2.0];
        assert_eq!(report.overrides.tower_outer_diameter.len(), expected.len());
        for (d, want) in report.overrides.tower_outer_diameter.iter().zip(expected) {
            assert_relative_eq!(d.get::<meter>(), want, epsilon = 1e-12);
        }

        assert_relative_eq!(
            report.overrides.min_rotor_speed.get::<radian_per_second>(),
            0.0
        );
        // 85 m/s tip limit on a 103 m rotor.
        assert_relative_eq!(
            report.overrides.max_rotor_speed.get::<radian_per_second>(),
            1.650_485_436_9,
            epsilon = 1e-9,
        );

        // The solver saw exactly what the report carries.
        assert_eq!(solver.seen.borrow().as_ref(), Some(&report.overrides));
    }

    #[test]
    fn worker_skips_option_writes_but_still_solves() {
        let config = config_for_rank(1);
        let archive = FakeArchive::new();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let report = run_step(&config, &archive, &mut store, &solver).unwrap();

        assert!(store.analysis.is_none());
        assert!(store.modeling.is_none());
        assert!(solver.seen.borrow().is_some());
        assert_eq!(report.output, 42);
    }

    #[test]
    fn reports_anomalies_without_failing() {
        let config = config_for_rank(1);
        let mut archive = FakeArchive::new();
        // A bulge below mid-span survives the uniform scaling and shows up
        // as a widening station in the rescaled profile.
        archive.profile = DiameterProfile::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            [3.0, 3.5, 3.0, 2.5, 2.0]
                .iter()
                .map(|&d| Length::new::<meter>(d))
                .collect(),
        )
        .unwrap();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let report = run_step(&config, &archive, &mut store, &solver).unwrap();

        assert!(
            report
                .anomalies
                .contains(&DiameterAnomaly::WideningProfile { station: 1 }),
            "expected a widening anomaly, got {:?}",
            report.anomalies
        );
    }

    #[test]
    fn archive_failure_surfaces_with_context() {
        let config = config_for_rank(0);
        let mut archive = FakeArchive::new();
        archive.fail_loading = true;
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let err = run_step(&config, &archive, &mut store, &solver).unwrap_err();
        match err {
            StepError::Archive { context, .. } => assert_eq!(context, "RNA loading"),
            other => panic!("expected Archive error, got: {other:?}"),
        }
        assert!(solver.seen.borrow().is_none());
    }

    #[test]
    fn degenerate_profile_fails_the_step() {
        let config = config_for_rank(1);
        let mut archive = FakeArchive::new();
        archive.profile = DiameterProfile::new(
            vec![0.0, 1.0, 2.0],
            [0.0, 3.0, 2.0]
                .iter()
                .map(|&d| Length::new::<meter>(d))
                .collect(),
        )
        .unwrap();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::succeeding();

        let err = run_step(&config, &archive, &mut store, &solver).unwrap_err();
        assert!(matches!(
            err,
            StepError::Rescale(RescaleError::ZeroRootDiameter)
        ));
    }

    #[test]
    fn solver_failure_surfaces() {
        let config = config_for_rank(1);
        let archive = FakeArchive::new();
        let mut store = FakeOptionsStore::default();
        let solver = FakeSolver::failing();

        let err = run_step(&config, &archive, &mut store, &solver).unwrap_err();
        assert!(matches!(err, StepError::Solver { .. }));
    }
}
