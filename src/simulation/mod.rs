//! Simulation model of nanoparticle transport across the blood-brain barrier.
//!
//! All operations are pure functions of their inputs and the model's
//! [`SimulationConstants`]. They compose into a pipeline:
//!
//! ```text
//! transport(size, charge) ─┐
//! fus_enhancement(kPa) ────┼─> survival multiplier ─> predicted days ─> net reward
//! release_gate(pH, hyp) ───┘
//! ```
//!
//! Physically invalid inputs (non-positive size, out-of-envelope pH) are not
//! rejected here; they produce a defined but meaningless number. Validate at
//! the boundary.

pub mod constants;
pub mod design;
pub mod fus;
pub mod landscape;
pub mod release;
pub mod survival;
pub mod transport;

pub use constants::SimulationConstants;
pub use design::{DesignParameters, PhysiologicalContext};
pub use landscape::{optimal_size, size_sweep, sizes_inclusive, ResponseSurface, SizeSample};
pub use survival::Prediction;
pub use transport::TransportOutcome;

/// Stateless evaluator of the transport and survival model.
///
/// Cheap to copy and safe to share read-only across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationModel {
    constants: SimulationConstants,
}

impl SimulationModel {
    /// Creates a model over the given constants.
    pub fn new(constants: SimulationConstants) -> Self {
        Self { constants }
    }

    /// Constants this model was built with.
    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }
}
