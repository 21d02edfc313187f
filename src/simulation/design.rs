//! Inputs to the simulation: what the carrier looks like and where it lands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanoparticle design parameters.
///
/// Only the sign of `charge` matters to the model: positive is cationic,
/// zero or negative is treated as neutral/anionic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignParameters {
    /// Particle diameter (nm). Callers keep this positive.
    pub size_nm: f64,
    /// Surface charge.
    pub charge: f64,
    /// Steric-shielding PEG coverage in `[0, 1]`.
    pub peg_density: f64,
}

impl DesignParameters {
    pub fn new(size_nm: f64, charge: f64, peg_density: f64) -> Self {
        Self {
            size_nm,
            charge,
            peg_density,
        }
    }

    /// Returns `true` for a positively charged surface.
    pub fn is_cationic(&self) -> bool {
        is_cationic_charge(self.charge)
    }
}

/// Positive surface charge rides adsorptive-mediated transcytosis.
pub(crate) fn is_cationic_charge(charge: f64) -> bool {
    charge > 0.0
}

/// Tumor microenvironment and intervention settings for one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysiologicalContext {
    /// Tumor pH, typically 6.0 to 7.4.
    pub tumor_ph: f64,
    /// Hypoxic fraction of the tumor in `[0, 1]`.
    pub hypoxia_fraction: f64,
    /// Whether focused ultrasound is applied.
    pub fus_enabled: bool,
    /// FUS acoustic pressure (kPa). `None` uses the model's reference pressure.
    pub fus_pressure_kpa: Option<f64>,
}

impl PhysiologicalContext {
    pub fn new(tumor_ph: f64, hypoxia_fraction: f64, fus_enabled: bool) -> Self {
        Self {
            tumor_ph,
            hypoxia_fraction,
            fus_enabled,
            fus_pressure_kpa: None,
        }
    }

    /// Same context with a different FUS pressure.
    pub fn with_fus_pressure(mut self, pressure_kpa: f64) -> Self {
        self.fus_pressure_kpa = Some(pressure_kpa);
        self
    }
}

impl Default for PhysiologicalContext {
    /// Acidic, mildly hypoxic tumor with FUS on at the reference pressure.
    fn default() -> Self {
        Self::new(6.5, 0.1, true)
    }
}
