//! Focused-ultrasound permeability enhancement.

use super::SimulationModel;

impl SimulationModel {
    /// Permeability multiplier at `pressure_kpa`.
    ///
    /// Affine in pressure: 1 at 0 kPa, the configured boost at the reference
    /// pressure, and extrapolated without clamping beyond it.
    pub fn fus_enhancement(&self, pressure_kpa: f64) -> f64 {
        let c = &self.constants;
        1.0 + (pressure_kpa / c.fus_reference_pressure_kpa) * (c.fus_permeability_boost - 1.0)
    }

    /// Multiplier at the literature reference pressure.
    pub fn reference_fus_enhancement(&self) -> f64 {
        self.fus_enhancement(self.constants.fus_reference_pressure_kpa)
    }
}
