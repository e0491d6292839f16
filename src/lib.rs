//! # Turbine Models
//!
//! Domain-specific models and step-building tools for wind-turbine
//! structural design-optimization pipelines.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations and pipeline steps.
//! - [`support`]: Supporting utilities used by models.
//!
//! A pipeline step takes the persisted state of the previous step, derives
//! new analysis and modeling configuration from it, and hands a set of
//! overridden parameters to an external multidisciplinary solver. The solver,
//! the on-disk formats, and any distributed-execution host are collaborators
//! behind traits; this crate owns the transforms between them.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
