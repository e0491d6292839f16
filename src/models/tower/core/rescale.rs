//! Mid-span blended profile rescaling.

use thiserror::Error;
use uom::{
    ConstZero,
    si::f64::{Length, Ratio},
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::profile::DiameterProfile;

/// Errors that can occur while rescaling a profile.
///
/// Both variants are degenerate-input conditions that would otherwise divide
/// by zero. The transform fails fast rather than propagating NaN or infinite
/// diameters downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RescaleError {
    /// The scaling factor is `max_diameter / root`, which is undefined for a
    /// zero root diameter.
    #[error("root diameter is zero, so the rescaling factor is undefined")]
    ZeroRootDiameter,

    /// The taper runs from the mid-span station to the tip; those stations
    /// coincide for a 2-station profile.
    #[error("taper span is degenerate: mid-span and tip stations coincide")]
    DegenerateTaperSpan,
}

/// Re-profiles a tower so its root diameter equals `max_diameter`.
///
/// Below the mid-span station the profile keeps its shape, uniformly scaled
/// by `max_diameter / root`. From mid-span upward it is replaced with a
/// straight taper from the scaled mid-span diameter to the *original* tip
/// diameter, evaluated at each grid position. The mid-span index is `n / 2`,
/// which assumes an evenly spaced grid; spacing is not validated here.
///
/// # Errors
///
/// Returns a [`RescaleError`] if the root diameter is zero or the taper span
/// collapses to a point.
pub(crate) fn rescale(
    profile: &DiameterProfile,
    max_diameter: Constrained<Length, StrictlyPositive>,
) -> Result<DiameterProfile, RescaleError> {
    let grid = profile.grid();
    let diameters = profile.diameters();
    let n = profile.stations();
    let mid = n / 2;

    let root = diameters[0];
    if root == Length::ZERO {
        return Err(RescaleError::ZeroRootDiameter);
    }

    let taper_span = grid[n - 1] - grid[mid];
    if taper_span == 0.0 {
        return Err(RescaleError::DegenerateTaperSpan);
    }

    let scale: Ratio = max_diameter.into_inner() / root;
    let scaled_mid: Length = diameters[mid] * scale;
    let slope: Length = (diameters[n - 1] - scaled_mid) / taper_span;

    let mut result = Vec::with_capacity(n);
    for (i, (&x, &d)) in grid.iter().zip(diameters).enumerate() {
        let value: Length = if i < mid {
            d * scale
        } else {
            scaled_mid + slope * (x - grid[mid])
        };
        result.push(value);
    }

    Ok(DiameterProfile::new_unchecked(grid.to_vec(), result))
}
