//! Tower geometry models.
//!
//! The computational core is in the internal [`core`] module. The public
//! surface is the [`TowerRescale`] adapter plus the core types it consumes
//! and produces.

pub(crate) mod core;

pub use self::core::{DiameterAnomaly, DiameterProfile, ProfileError, RescaleError};

use twine_core::Model;
use uom::si::f64::Length;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Caps a tower outer-diameter profile at a maximum root diameter.
///
/// The root is set exactly to the cap and the lower half of the tower keeps
/// its shape under that uniform scaling. From mid-span upward the profile is
/// replaced with a straight taper ending at the profile's *original* tip
/// diameter, so the tower-top interface is preserved while the base is
/// widened or narrowed to the cap. Road transport limits typically drive the
/// cap; the tip section is set by the yaw-bearing interface.
///
/// The transform is not idempotent: the scaling factor is relative to the
/// current root diameter, so applying it to its own output produces yet
/// another profile rather than a fixed point.
#[derive(Debug, Clone, Copy)]
pub struct TowerRescale {
    max_diameter: Constrained<Length, StrictlyPositive>,
}

impl TowerRescale {
    /// Creates a rescaler that caps profiles at `max_diameter`.
    #[must_use]
    pub fn new(max_diameter: Constrained<Length, StrictlyPositive>) -> Self {
        Self { max_diameter }
    }
}

impl Model for TowerRescale {
    type Input = DiameterProfile;
    type Output = DiameterProfile;
    type Error = RescaleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::rescale(input, self.max_diameter)
    }
}
