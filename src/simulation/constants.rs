//! Literature-derived constants that parameterize every simulation call.

use qtty::{Day, Quantity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed physical and clinical constants of the transport model.
///
/// Built once (usually via [`Default`]) and handed to a
/// [`SimulationModel`](super::SimulationModel); nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConstants {
    /// Brain extracellular spacing (nm).
    /// Source: Thorne & Nicholson, PNAS 2006
    pub extracellular_space_nm: f64,

    /// Polymeric nanoparticle diffusion coefficient (m²/s).
    /// Source: Hersh et al. 2022
    pub diffusion_coeff_m2s: f64,

    /// Efficiency multiplier for adsorptive-mediated transcytosis of cationic carriers.
    /// Source: Knudsen 2013
    pub cationic_amt_boost: f64,

    /// Toxicity multiplier for cationic carriers. Must be greater than 1.
    /// Source: Knudsen 2013
    pub cationic_toxicity_factor: f64,

    /// Acoustic pressure used in the FUS Phase 1 trial (kPa).
    /// Source: Mainprize et al., Sci Rep 2019
    pub fus_reference_pressure_kpa: f64,

    /// Permeability multiplier reached at the reference pressure.
    /// Source: Mainprize et al., Sci Rep 2019
    pub fus_permeability_boost: f64,

    /// Untreated control survival.
    /// Source: Hersh et al. 2022
    pub baseline_survival: Quantity<Day>,

    /// Survival of the best published carrier (PBCA-doxorubicin).
    /// Source: Hersh et al. 2022
    pub best_case_survival: Quantity<Day>,

    /// Release only happens strictly below this pH.
    /// Source: Badeau et al. 2018
    pub release_ph_cutoff: f64,

    /// Release only happens strictly above this hypoxic fraction.
    /// Source: Badeau et al. 2018
    pub release_hypoxia_cutoff: f64,
}

impl SimulationConstants {
    /// Control survival in days.
    pub fn baseline_days(&self) -> f64 {
        self.baseline_survival.value()
    }

    /// Best-case benchmark survival in days.
    pub fn best_case_days(&self) -> f64 {
        self.best_case_survival.value()
    }
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            extracellular_space_nm: 20.0,
            diffusion_coeff_m2s: 1e-12,
            cationic_amt_boost: 100.0,
            cationic_toxicity_factor: 2.0,
            fus_reference_pressure_kpa: 500.0,
            fus_permeability_boost: 2.0,
            baseline_survival: Quantity::<Day>::new(31.0),
            best_case_survival: Quantity::<Day>::new(57.0),
            release_ph_cutoff: 6.8,
            release_hypoxia_cutoff: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_literature() {
        let c = SimulationConstants::default();
        assert_eq!(c.extracellular_space_nm, 20.0);
        assert_eq!(c.cationic_amt_boost, 100.0);
        assert_eq!(c.fus_reference_pressure_kpa, 500.0);
        assert_eq!(c.baseline_days(), 31.0);
        assert_eq!(c.best_case_days(), 57.0);
    }

    #[test]
    fn cationic_factors_penalize_and_boost() {
        let c = SimulationConstants::default();
        assert!(c.cationic_amt_boost > 1.0);
        assert!(c.cationic_toxicity_factor > 1.0);
        assert!(c.fus_permeability_boost >= 1.0);
    }
}
