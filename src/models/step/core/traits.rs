//! Collaborator seams for a pipeline step.
//!
//! A step owns the transforms between its collaborators, never the I/O
//! itself. Production implementations wrap the pipeline's on-disk documents
//! and the external solver entry point; tests substitute fakes.

use std::error::Error;

use crate::models::tower::DiameterProfile;

use super::{
    loading::RnaLoading,
    options::{AnalysisOptions, ModelingOptions},
    overrides::Overrides,
};

/// Read access to the previous step's persisted state.
pub trait ModelArchive {
    type Error: Error + Send + Sync + 'static;

    /// The tower outer-diameter profile of the persisted model.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the state cannot be read or
    /// does not contain a valid profile.
    fn tower_diameter_profile(&self) -> Result<DiameterProfile, Self::Error>;

    /// Tower-top loading recovered from the previous step's solved state.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the solved state cannot be read.
    fn rna_loading(&self) -> Result<RnaLoading, Self::Error>;
}

/// Write access for the step's derived configuration.
///
/// Only the coordinator role writes. Implementations need not tolerate
/// concurrent writers.
pub trait OptionsStore {
    type Error: Error + Send + Sync + 'static;

    /// Persists the analysis options for this step.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the write fails.
    fn write_analysis(&mut self, options: &AnalysisOptions) -> Result<(), Self::Error>;

    /// Persists the modeling options for this step.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the write fails.
    fn write_modeling(&mut self, options: &ModelingOptions) -> Result<(), Self::Error>;
}

/// The external multidisciplinary solver, treated as a black box.
pub trait Solver {
    type Output;
    type Error: Error + Send + Sync + 'static;

    /// Runs the solver with the given parameter overrides.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the solve fails.
    fn run(&self, overrides: &Overrides) -> Result<Self::Output, Self::Error>;
}
