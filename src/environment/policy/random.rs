//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::environment::action::{ActionBounds, DesignAction};
use crate::environment::observation::Observation;

/// Uniformly random designs within the action bounds.
///
/// Seeded so evaluation runs are reproducible. Used for sanity checks and
/// as a lower-bound baseline.
pub struct RandomPolicy {
    bounds: ActionBounds,
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy.
    ///
    /// # Arguments
    ///
    /// * `bounds` - Box to sample from
    /// * `seed` - Random seed for reproducible designs
    pub fn new(bounds: ActionBounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, i: usize) -> f64 {
        let (lo, hi) = (self.bounds.low[i], self.bounds.high[i]);
        if lo < hi {
            self.rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &Observation) -> DesignAction {
        let size_nm = self.sample(0);
        let peg_density = self.sample(1);
        let charge = self.sample(2);
        DesignAction::new(size_nm, peg_density, charge)
    }

    fn name(&self) -> &str {
        "random"
    }
}
