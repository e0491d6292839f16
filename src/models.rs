//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., [`tower`] for
//! tower geometry, [`step`] for whole pipeline steps). This organization may
//! evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The `core`
//! module is an implementation detail; its types are re-exported selectively.
//!
//! Where a model is a pure transform, the public surface is a thin
//! [`twine_core::Model`] adapter that delegates to the model-specific core
//! API (see [`tower::TowerRescale`]).

pub mod step;
pub mod tower;
