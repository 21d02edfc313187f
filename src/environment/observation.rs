//! Observation encoding: `[size_nm, peg_density, charge, hypoxia_fraction]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::action::DesignAction;

/// What the optimizer sees after reset or a step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    pub size_nm: f64,
    pub peg_density: f64,
    pub charge: f64,
    pub hypoxia_fraction: f64,
}

impl Observation {
    pub const DIM: usize = 4;

    pub fn new(size_nm: f64, peg_density: f64, charge: f64, hypoxia_fraction: f64) -> Self {
        Self {
            size_nm,
            peg_density,
            charge,
            hypoxia_fraction,
        }
    }

    /// Echoes the action back with the environment's hypoxia appended.
    pub fn from_action(action: &DesignAction, hypoxia_fraction: f64) -> Self {
        Self::new(
            action.size_nm,
            action.peg_density,
            action.charge,
            hypoxia_fraction,
        )
    }

    /// The reference design the environment resets to.
    pub fn canonical() -> Self {
        Self::new(50.0, 0.1, 1.0, 0.1)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.size_nm,
            self.peg_density,
            self.charge,
            self.hypoxia_fraction,
        ]
    }

    /// The design part of the observation, as an action.
    pub fn design_action(&self) -> DesignAction {
        DesignAction::new(self.size_nm, self.peg_density, self.charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let obs = Observation::from_action(&DesignAction::new(30.0, 0.4, -1.0), 0.2);
        assert_eq!(obs.to_vec(), vec![30.0, 0.4, -1.0, 0.2]);
        assert_eq!(obs.to_vec().len(), Observation::DIM);
    }

    #[test]
    fn canonical_design() {
        let obs = Observation::canonical();
        assert_eq!(obs.to_vec(), vec![50.0, 0.1, 1.0, 0.1]);
        assert_eq!(obs.design_action(), DesignAction::new(50.0, 0.1, 1.0));
    }
}
