//! Action encoding: `[size_nm, peg_density, charge]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EnvError;
use crate::simulation::DesignParameters;

/// One design proposal from the optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignAction {
    pub size_nm: f64,
    pub peg_density: f64,
    pub charge: f64,
}

impl DesignAction {
    /// Number of components in the flat action vector.
    pub const DIM: usize = 3;

    pub fn new(size_nm: f64, peg_density: f64, charge: f64) -> Self {
        Self {
            size_nm,
            peg_density,
            charge,
        }
    }

    /// Decodes a flat `[size_nm, peg_density, charge]` vector.
    pub fn from_slice(values: &[f64]) -> Result<Self, EnvError> {
        match values {
            &[size_nm, peg_density, charge] => Ok(Self::new(size_nm, peg_density, charge)),
            _ => Err(EnvError::InvalidArgument {
                expected: Self::DIM,
                actual: values.len(),
            }),
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.size_nm, self.peg_density, self.charge]
    }

    pub fn design(&self) -> DesignParameters {
        DesignParameters::new(self.size_nm, self.charge, self.peg_density)
    }
}

impl From<[f64; 3]> for DesignAction {
    fn from([size_nm, peg_density, charge]: [f64; 3]) -> Self {
        Self::new(size_nm, peg_density, charge)
    }
}

/// Advisory bounds of the action space.
///
/// The environment does not enforce them; see [`DesignEnvironment::step`](super::DesignEnvironment::step).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionBounds {
    pub low: [f64; 3],
    pub high: [f64; 3],
}

impl ActionBounds {
    pub fn contains(&self, action: &DesignAction) -> bool {
        action
            .to_array()
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }

    /// Component-wise clamp into the bounds.
    pub fn clip(&self, action: &DesignAction) -> DesignAction {
        let v = action.to_array();
        DesignAction::new(
            v[0].clamp(self.low[0], self.high[0]),
            v[1].clamp(self.low[1], self.high[1]),
            v[2].clamp(self.low[2], self.high[2]),
        )
    }

    pub(crate) fn is_ordered(&self) -> bool {
        self.low.iter().zip(self.high.iter()).all(|(lo, hi)| lo <= hi)
    }
}

impl Default for ActionBounds {
    /// `size_nm ∈ [10, 100]`, `peg_density ∈ [0, 1]`, `charge ∈ [-1, 1]`.
    fn default() -> Self {
        Self {
            low: [10.0, 0.0, -1.0],
            high: [100.0, 1.0, 1.0],
        }
    }
}
