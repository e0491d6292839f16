//! One step of the design-optimization pipeline.

mod config;
mod error;
mod loading;
mod options;
mod overrides;
mod run;
mod traits;

#[cfg(test)]
mod test_support;

pub use config::{Role, StepConfig};
pub use error::StepError;
pub use loading::{LoadCase, RnaLoading};
pub use options::{
    AnalysisOptions, MeritFigure, ModelingOptions, OutputNaming, TowerConstraints,
    TowerDesignVariables,
};
pub use overrides::Overrides;
pub use run::{StepReport, run_step};
pub use traits::{ModelArchive, OptionsStore, Solver};
