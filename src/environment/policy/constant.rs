//! Fixed-design policy.

use super::trait_::Policy;
use crate::environment::action::DesignAction;
use crate::environment::observation::Observation;

/// Always proposes the same design.
///
/// With the canonical design this gives the reference return every
/// optimizer should beat.
pub struct ConstantPolicy {
    action: DesignAction,
}

impl ConstantPolicy {
    pub fn new(action: DesignAction) -> Self {
        Self { action }
    }

    /// Policy that keeps proposing the canonical reset design.
    pub fn canonical() -> Self {
        Self::new(Observation::canonical().design_action())
    }
}

impl Policy for ConstantPolicy {
    fn select_action(&mut self, _observation: &Observation) -> DesignAction {
        self.action
    }

    fn name(&self) -> &str {
        "constant"
    }
}
