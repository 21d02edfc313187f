//! Survival prediction and net reward.
//!
//! ```text
//! multiplier = efficiency × fus × release
//! days       = baseline_days × multiplier
//! reward     = days / best_case_days − toxicity
//! ```
//!
//! A closed release gate zeroes survival outright, whatever the transport
//! efficiency or FUS multiplier.

use qtty::{Day, Quantity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::design::{DesignParameters, PhysiologicalContext};
use super::transport::TransportOutcome;
use super::SimulationModel;

/// Full result of one pass through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prediction {
    /// Transport stage output.
    pub transport: TransportOutcome,
    /// FUS multiplier actually applied (1 when FUS is off).
    pub fus_multiplier: f64,
    /// Release gate value, `0.0` or `1.0`.
    pub release: f64,
    /// Predicted survival.
    pub predicted_survival: Quantity<Day>,
    /// Survival relative to the best-case benchmark, minus toxicity.
    pub net_reward: f64,
    /// Best-case benchmark the reward was normalized against (days).
    best_case_days: f64,
}

impl Prediction {
    /// Predicted survival in days.
    pub fn predicted_days(&self) -> f64 {
        self.predicted_survival.value()
    }

    /// `(predicted_days, net_reward)` pair.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.predicted_days(), self.net_reward)
    }

    /// Ratio of predicted survival to the best published carrier.
    pub fn improvement_over_best_case(&self) -> f64 {
        self.predicted_days() / self.best_case_days
    }

    /// Whether the drug was released at all.
    pub fn released(&self) -> bool {
        self.release > 0.0
    }
}

impl SimulationModel {
    /// Runs the full transport → FUS → release → survival pipeline.
    pub fn predict(&self, size_nm: f64, charge: f64, context: &PhysiologicalContext) -> Prediction {
        let c = &self.constants;

        let transport = self.transport(size_nm, charge);
        let fus_multiplier = if context.fus_enabled {
            let pressure = context
                .fus_pressure_kpa
                .unwrap_or(c.fus_reference_pressure_kpa);
            self.fus_enhancement(pressure)
        } else {
            1.0
        };
        let release = self.release_gate(context.tumor_ph, context.hypoxia_fraction);

        let predicted_days = if release > 0.0 {
            c.baseline_days() * (transport.efficiency * fus_multiplier * release)
        } else {
            0.0
        };
        let net_reward = predicted_days / c.best_case_days() - transport.toxicity;

        Prediction {
            transport,
            fus_multiplier,
            release,
            predicted_survival: Quantity::<Day>::new(predicted_days),
            net_reward,
            best_case_days: c.best_case_days(),
        }
    }

    /// Pipeline over a full design. PEG density does not enter the model.
    pub fn predict_design(
        &self,
        design: &DesignParameters,
        context: &PhysiologicalContext,
    ) -> Prediction {
        self.predict(design.size_nm, design.charge, context)
    }
}
