//! Pipeline step models.
//!
//! A step reads the previous step's persisted state, derives analysis and
//! modeling configuration from it, rescales the tower profile, and invokes
//! the external solver with overridden parameters. All I/O goes through the
//! collaborator traits ([`ModelArchive`], [`OptionsStore`], [`Solver`]), so
//! a step can run against real files and solvers or against fakes in tests.
//!
//! The computational logic is in the internal [`core`] module; [`run_step`]
//! is the entry point.

pub(crate) mod core;

pub use self::core::{
    AnalysisOptions, LoadCase, MeritFigure, ModelArchive, ModelingOptions, OptionsStore,
    OutputNaming, Overrides, RnaLoading, Role, Solver, StepConfig, StepError, StepReport,
    TowerConstraints, TowerDesignVariables, run_step,
};
