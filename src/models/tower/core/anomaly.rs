use uom::ConstZero;
use uom::si::f64::Length;

use super::profile::DiameterProfile;

/// An advisory finding about a diameter profile.
///
/// Anomalies flag physically suspect geometry without failing the transform
/// that produced it. Callers decide whether to warn or abort; a widening
/// station is occasionally legitimate (flanged sections), a negative
/// diameter never is, but both are left to the caller's judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiameterAnomaly {
    /// The diameter at this station is below zero.
    NegativeDiameter { station: usize },

    /// The diameter grows with height between `station - 1` and `station`.
    WideningProfile { station: usize },
}

impl DiameterProfile {
    /// Scans the profile for physically suspect diameters.
    ///
    /// Returns one entry per offending station, base to tip. An empty result
    /// means the profile is non-negative and non-widening throughout.
    #[must_use]
    pub fn anomalies(&self) -> Vec<DiameterAnomaly> {
        let diameters = self.diameters();
        let mut found = Vec::new();

        for (station, &d) in diameters.iter().enumerate() {
            if d < Length::ZERO {
                found.push(DiameterAnomaly::NegativeDiameter { station });
            }
            if station > 0 && d > diameters[station - 1] {
                found.push(DiameterAnomaly::WideningProfile { station });
            }
        }

        found
    }
}
