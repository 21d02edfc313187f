//! Design environment: the simulation wrapped as a fixed-horizon MDP.
//!
//! An optimizer drives it through `reset`/`step`. Each step evaluates one
//! design `[size_nm, peg_density, charge]` in the configured tumor scenario
//! and returns the observation, the shaped reward and termination flags.
//!
//! Each optimizer must own its environment; episode state is not
//! synchronized.

pub mod action;
pub mod config;
pub mod design_env;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod reward;

#[cfg(test)]
mod tests;

pub use action::{ActionBounds, DesignAction};
pub use config::EnvConfig;
pub use design_env::{DesignEnvironment, StepResult};
pub use error::EnvError;
pub use metrics::EvaluationMetrics;
pub use observation::Observation;
pub use policy::{ConstantPolicy, Policy, RandomPolicy};
pub use reward::RewardComputer;
