//! BBB transport efficiency and toxicity.
//!
//! Steric hindrance is a Gaussian rejection of the particle against the
//! extracellular spacing: `steric = exp(-(size / space)^2)`. Cationic
//! carriers additionally ride adsorptive-mediated transcytosis at the cost
//! of toxicity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::design::is_cationic_charge;
use super::SimulationModel;

/// Output of the transport stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransportOutcome {
    /// Relative delivery efficiency (steric factor, boosted when cationic).
    pub efficiency: f64,
    /// Toxicity multiplier, exactly 1 for non-cationic carriers.
    pub toxicity: f64,
}

impl SimulationModel {
    /// Gaussian steric factor for a particle of `size_nm`.
    pub fn steric_factor(&self, size_nm: f64) -> f64 {
        let size_ratio = size_nm / self.constants.extracellular_space_nm;
        (-(size_ratio * size_ratio)).exp()
    }

    /// Transport efficiency and toxicity for a size/charge pair.
    ///
    /// Only the sign of `charge` is used.
    pub fn transport(&self, size_nm: f64, charge: f64) -> TransportOutcome {
        let steric = self.steric_factor(size_nm);

        if is_cationic_charge(charge) {
            TransportOutcome {
                efficiency: self.constants.cationic_amt_boost * steric,
                toxicity: self.constants.cationic_toxicity_factor,
            }
        } else {
            TransportOutcome {
                efficiency: steric,
                toxicity: 1.0,
            }
        }
    }
}
