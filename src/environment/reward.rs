//! Step reward: the simulation's net reward minus a PEG shielding penalty.
//!
//! Under-shielded carriers are opsonized, over-shielded ones lose uptake;
//! the penalty is symmetric around a single optimal coverage.

use super::config::EnvConfig;
use crate::simulation::Prediction;

/// Computes rewards for the design environment.
pub struct RewardComputer;

impl RewardComputer {
    /// `weight × |peg_density − optimum|`.
    pub fn peg_penalty(peg_density: f64, config: &EnvConfig) -> f64 {
        config.peg_penalty_weight * (peg_density - config.peg_optimum).abs()
    }

    /// Final reward for one step.
    pub fn compute(prediction: &Prediction, peg_density: f64, config: &EnvConfig) -> f64 {
        prediction.net_reward - Self::peg_penalty(peg_density, config)
    }
}
