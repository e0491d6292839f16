//! Tower outer-diameter profile transforms.
//!
//! A profile samples the tower's outer diameter at a set of normalized span
//! positions. The transforms here re-shape profiles between optimization
//! steps; structural consequences are left to the downstream solver.

mod anomaly;
mod profile;
mod rescale;

pub use anomaly::DiameterAnomaly;
pub use profile::{DiameterProfile, ProfileError};
pub use rescale::RescaleError;

pub(crate) use rescale::rescale;
