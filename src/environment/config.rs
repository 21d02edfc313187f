//! Configuration for the design environment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::action::{ActionBounds, DesignAction};
use super::error::EnvError;
use super::observation::Observation;
use crate::simulation::PhysiologicalContext;

/// Configuration for the design environment.
///
/// Fixes the tumor scenario every step is evaluated in, the episode horizon,
/// and the PEG shielding penalty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    // --- Episode ---
    /// Number of steps before `terminated` is raised.
    pub max_steps: u32,
    /// Design reported by `reset()`; the scenario's hypoxia is appended.
    pub initial_design: DesignAction,

    // --- Scenario ---
    /// Tumor pH used for every step.
    pub tumor_ph: f64,
    /// Hypoxic fraction used for every step, also echoed in observations.
    pub hypoxia_fraction: f64,
    /// Whether focused ultrasound is applied.
    pub fus_enabled: bool,
    /// FUS pressure (kPa); `None` uses the model's reference pressure.
    pub fus_pressure_kpa: Option<f64>,

    // --- Reward shaping ---
    /// PEG coverage with zero penalty.
    pub peg_optimum: f64,
    /// Penalty per unit distance from the PEG optimum.
    pub peg_penalty_weight: f64,

    // --- Action space ---
    /// Advisory action bounds.
    pub action_bounds: ActionBounds,
}

impl EnvConfig {
    /// Physiological context each step is simulated in.
    pub fn context(&self) -> PhysiologicalContext {
        PhysiologicalContext {
            tumor_ph: self.tumor_ph,
            hypoxia_fraction: self.hypoxia_fraction,
            fus_enabled: self.fus_enabled,
            fus_pressure_kpa: self.fus_pressure_kpa,
        }
    }

    /// Observation returned by `reset()`.
    pub fn initial_observation(&self) -> Observation {
        Observation::from_action(&self.initial_design, self.hypoxia_fraction)
    }

    /// Checks the configuration for values that make episodes meaningless.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.max_steps == 0 {
            return Err(EnvError::InvalidConfig(
                "max_steps must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.hypoxia_fraction) {
            return Err(EnvError::InvalidConfig(format!(
                "hypoxia_fraction must lie in [0, 1], got {}",
                self.hypoxia_fraction
            )));
        }
        if !self.action_bounds.is_ordered() {
            return Err(EnvError::InvalidConfig(
                "action bounds have low > high".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_steps: 50,
            initial_design: Observation::canonical().design_action(),
            tumor_ph: 6.5,
            hypoxia_fraction: 0.1,
            fus_enabled: true,
            fus_pressure_kpa: None,
            peg_optimum: 0.1,
            peg_penalty_weight: 2.0,
            action_bounds: ActionBounds::default(),
        }
    }
}
