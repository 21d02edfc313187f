//! pH/hypoxia-gated drug release.

use super::SimulationModel;

impl SimulationModel {
    /// Returns `true` only inside the tumor envelope: pH strictly below the
    /// cutoff and hypoxic fraction strictly above its cutoff.
    pub fn releases(&self, ph: f64, hypoxia_fraction: f64) -> bool {
        ph < self.constants.release_ph_cutoff
            && hypoxia_fraction > self.constants.release_hypoxia_cutoff
    }

    /// Hard release gate as a multiplicative factor: `1.0` or `0.0`.
    pub fn release_gate(&self, ph: f64, hypoxia_fraction: f64) -> f64 {
        if self.releases(ph, hypoxia_fraction) {
            1.0
        } else {
            0.0
        }
    }
}
