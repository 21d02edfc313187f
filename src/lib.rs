//! neurocarrier - nanoparticle carrier design against the blood-brain barrier
//!
//! A deterministic model of how engineered nanoparticles cross the BBB and
//! what survival they buy, wrapped as a fixed-horizon design environment for
//! sequential-decision optimizers.

pub mod environment;
pub mod simulation;

pub use environment::{DesignAction, DesignEnvironment, EnvConfig, EnvError, StepResult};
pub use simulation::{
    DesignParameters, PhysiologicalContext, Prediction, SimulationConstants, SimulationModel,
};

/// Identifier type used for episodes.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
