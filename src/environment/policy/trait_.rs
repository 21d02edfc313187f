//! Policy trait for the design environment.

use crate::environment::action::DesignAction;
use crate::environment::observation::Observation;

/// A policy that proposes the next design from the current observation.
pub trait Policy: Send + Sync {
    /// Selects the next design.
    ///
    /// # Arguments
    ///
    /// * `observation` - Last observation returned by `reset()` or `step()`
    fn select_action(&mut self, observation: &Observation) -> DesignAction;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
