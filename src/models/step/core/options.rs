use uom::si::f64::{Frequency, Length};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::loading::RnaLoading;

/// Scalar objective of the outer optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeritFigure {
    /// Minimize tower structural mass.
    TowerMass,
    /// Maximize annual energy production.
    AnnualEnergyProduction,
    /// Minimize levelized cost of energy.
    CostOfEnergy,
}

/// Output folder and file naming for a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    /// Folder the step writes its outputs into, relative to the run directory.
    pub folder: String,
    /// Stem for the step's output files.
    pub file_stem: String,
}

impl OutputNaming {
    /// Conventional step naming: `outputs.{step}` and `{model_name}-step{step}`.
    #[must_use]
    pub fn for_step(model_name: &str, step: usize) -> Self {
        Self {
            folder: format!("outputs.{step}"),
            file_stem: format!("{model_name}-step{step}"),
        }
    }
}

/// Tower design variables the optimizer may move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerDesignVariables {
    /// Wall layer thickness is free.
    pub layer_thickness: bool,

    /// Outer diameter is free up to this bound, when present; fixed when
    /// `None`.
    pub outer_diameter_upper_bound: Option<Length>,
}

/// Tower constraints enforced during optimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerConstraints {
    /// Von Mises stress utilization.
    pub stress: bool,

    /// Global (column) buckling.
    pub global_buckling: bool,

    /// Shell (local) buckling.
    pub shell_buckling: bool,

    /// Lower bound on the first natural frequency, when constrained.
    /// Keeps the tower stiff enough to avoid rotor excitation.
    pub min_first_frequency: Option<Frequency>,
}

/// Analysis options handed to the solver's optimization driver.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub output: OutputNaming,

    /// Whether the optimization driver runs at all, as opposed to a single
    /// evaluation of the model.
    pub optimize: bool,

    pub tower: TowerDesignVariables,
    pub constraints: TowerConstraints,
    pub merit_figure: MeritFigure,
}

impl AnalysisOptions {
    /// Options for a constrained structural optimization of tower mass.
    ///
    /// Layer thickness and outer diameter are the design variables, with the
    /// diameter bounded above by the transport cap. Stress, both buckling
    /// modes, and the first-frequency bound are all enforced.
    #[must_use]
    pub fn tower_mass_minimization(
        output: OutputNaming,
        max_outer_diameter: Constrained<Length, StrictlyPositive>,
        min_first_frequency: Frequency,
    ) -> Self {
        Self {
            output,
            optimize: true,
            tower: TowerDesignVariables {
                layer_thickness: true,
                outer_diameter_upper_bound: Some(max_outer_diameter.into_inner()),
            },
            constraints: TowerConstraints {
                stress: true,
                global_buckling: true,
                shell_buckling: true,
                min_first_frequency: Some(min_first_frequency),
            },
            merit_figure: MeritFigure::TowerMass,
        }
    }
}

/// Modeling options handed to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelingOptions {
    /// Whether the rotor aero-structural model runs.
    pub rotor: bool,

    /// Whether the drivetrain model runs.
    pub drivetrain: bool,

    /// Number of tower load cases to evaluate.
    pub tower_load_cases: usize,

    /// Explicit tower-top loading, standing in for rotor model output.
    pub loading: RnaLoading,
}

impl ModelingOptions {
    /// Options for a tower-only analysis under explicit loading.
    ///
    /// Rotor and drivetrain models are switched off and a single load case
    /// is evaluated, with loading taken from the previous step's solved
    /// state.
    #[must_use]
    pub fn tower_only(loading: RnaLoading) -> Self {
        Self {
            rotor: false,
            drivetrain: false,
            tower_load_cases: 1,
            loading,
        }
    }
}
