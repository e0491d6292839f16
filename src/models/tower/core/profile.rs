use thiserror::Error;
use uom::si::f64::Length;

/// A spanwise tower outer-diameter profile.
///
/// Positions are normalized span along the tower height, station 0 at the
/// base. The grid is strictly increasing and diameters align one-to-one with
/// it. Profiles are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterProfile {
    grid: Vec<f64>,
    diameters: Vec<Length>,
}

/// Errors that can occur while constructing a [`DiameterProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Mid-span and tip stations must both exist.
    #[error("profile requires at least 2 stations, got {0}")]
    TooFewStations(usize),

    /// Grid and diameter sequences must align one-to-one.
    #[error("grid has {grid} stations but diameters has {diameters}")]
    LengthMismatch { grid: usize, diameters: usize },

    /// Grid positions must be strictly increasing.
    ///
    /// Also reported when a grid position is `NaN`, since `NaN` cannot
    /// satisfy a strict ordering.
    #[error("grid positions must be strictly increasing (violated at station {station})")]
    NonIncreasingGrid { station: usize },
}

impl DiameterProfile {
    /// Constructs a validated profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the sequences disagree in length, have
    /// fewer than 2 stations, or the grid is not strictly increasing.
    pub fn new(grid: Vec<f64>, diameters: Vec<Length>) -> Result<Self, ProfileError> {
        if grid.len() != diameters.len() {
            return Err(ProfileError::LengthMismatch {
                grid: grid.len(),
                diameters: diameters.len(),
            });
        }
        if grid.len() < 2 {
            return Err(ProfileError::TooFewStations(grid.len()));
        }
        for (i, pair) in grid.windows(2).enumerate() {
            // NaN fails this comparison and is rejected along with ties.
            if !(pair[1] > pair[0]) {
                return Err(ProfileError::NonIncreasingGrid { station: i + 1 });
            }
        }
        Ok(Self { grid, diameters })
    }

    /// Constructs a profile from pre-validated parts.
    ///
    /// # Warning
    ///
    /// The caller must ensure the sequences align, have at least 2 stations,
    /// and that the grid is strictly increasing. Violating these invariants
    /// will result in unexpected errors or panics downstream.
    #[must_use]
    pub fn new_unchecked(grid: Vec<f64>, diameters: Vec<Length>) -> Self {
        Self { grid, diameters }
    }

    /// Number of stations in the profile.
    #[must_use]
    pub fn stations(&self) -> usize {
        self.grid.len()
    }

    /// Normalized span positions, base to tip.
    #[must_use]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Outer diameters aligned with [`grid`](Self::grid).
    #[must_use]
    pub fn diameters(&self) -> &[Length] {
        &self.diameters
    }
}
