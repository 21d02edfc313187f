//! Reward landscapes over the design space.
//!
//! Pure sweeps for visualization and self-validation: reward as a function of
//! size at fixed charge, and the size × charge response surface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::design::PhysiologicalContext;
use super::SimulationModel;

/// One point of a size sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeSample {
    pub size_nm: f64,
    pub predicted_days: f64,
    pub net_reward: f64,
}

/// Largest grid [`sizes_inclusive`] will build.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly spaced sizes from `start` to `end` inclusive.
///
/// Returns an empty grid when an input is not finite, `step` is not
/// positive, `end < start`, or the grid would exceed [`MAX_GRID_POINTS`].
pub fn sizes_inclusive(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) || step <= 0.0 || end < start {
        return Vec::new();
    }
    let intervals = ((end - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as f64 {
        return Vec::new();
    }
    let n = intervals as usize;
    (0..=n).map(|i| start + i as f64 * step).collect()
}

/// Evaluates the pipeline at each size for a fixed charge.
pub fn size_sweep(
    model: &SimulationModel,
    sizes: &[f64],
    charge: f64,
    context: &PhysiologicalContext,
) -> Vec<SizeSample> {
    sizes
        .iter()
        .map(|&size_nm| {
            let p = model.predict(size_nm, charge, context);
            SizeSample {
                size_nm,
                predicted_days: p.predicted_days(),
                net_reward: p.net_reward,
            }
        })
        .collect()
}

/// Size with the highest net reward. Ties keep the first size.
pub fn optimal_size(
    model: &SimulationModel,
    sizes: &[f64],
    charge: f64,
    context: &PhysiologicalContext,
) -> Option<SizeSample> {
    size_sweep(model, sizes, charge, context)
        .into_iter()
        .fold(None, |best: Option<SizeSample>, s| match best {
            Some(b) if b.net_reward >= s.net_reward => Some(b),
            _ => Some(s),
        })
}

/// Net reward grid over charges (rows) and sizes (columns).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResponseSurface {
    pub sizes: Vec<f64>,
    pub charges: Vec<f64>,
    /// `rewards[i][j]` is the net reward at `charges[i]`, `sizes[j]`.
    pub rewards: Vec<Vec<f64>>,
}

impl ResponseSurface {
    pub fn compute(
        model: &SimulationModel,
        sizes: &[f64],
        charges: &[f64],
        context: &PhysiologicalContext,
    ) -> Self {
        let rewards = charges
            .iter()
            .map(|&charge| {
                sizes
                    .iter()
                    .map(|&size| model.predict(size, charge, context).net_reward)
                    .collect()
            })
            .collect();

        Self {
            sizes: sizes.to_vec(),
            charges: charges.to_vec(),
            rewards,
        }
    }

    /// Best cell as `(size_nm, charge, net_reward)`.
    ///
    /// Cells without a matching size or charge label are skipped.
    pub fn max(&self) -> Option<(f64, f64, f64)> {
        let mut best: Option<(f64, f64, f64)> = None;
        for (&charge, row) in self.charges.iter().zip(&self.rewards) {
            for (&size, &reward) in self.sizes.iter().zip(row) {
                if best.map_or(true, |(_, _, r)| reward > r) {
                    best = Some((size, charge, reward));
                }
            }
        }
        best
    }
}
