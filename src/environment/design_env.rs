//! Fixed-horizon design environment.
//!
//! Each step evaluates one proposed carrier design in a fixed tumor
//! scenario: simulate → shape reward → advance counter → report.

use log::{debug, trace, warn};

use super::action::DesignAction;
use super::config::EnvConfig;
use super::error::EnvError;
use super::observation::Observation;
use super::reward::RewardComputer;
use crate::simulation::{Prediction, SimulationModel};
use crate::{generate_id, Id};

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The action echoed back with the scenario's hypoxia.
    pub observation: Observation,
    /// Net reward minus PEG penalty.
    pub reward: f64,
    /// Whether the horizon has been reached.
    pub terminated: bool,
    /// Always `false`; there is no external time limit.
    pub truncated: bool,
    /// Step count after this step.
    pub step: u32,
    /// Simulation output behind the reward.
    pub prediction: Prediction,
    /// PEG penalty subtracted from the net reward.
    pub peg_penalty: f64,
}

/// Single-agent MDP over nanoparticle designs.
///
/// Two states: active while `step_count < max_steps`, done afterwards.
///
/// # Lifecycle
///
/// 1. Create with [`DesignEnvironment::new`]; a fresh environment is already
///    in the reset state.
/// 2. Call [`DesignEnvironment::reset`] to start an episode.
/// 3. Call [`DesignEnvironment::step`] until `terminated`.
/// 4. Stepping a finished episode returns [`EnvError::EpisodeDone`] and
///    leaves the state untouched; reset to continue.
///
/// Out-of-bounds actions are passed to the model unchanged. Callers that
/// want clipping use [`ActionBounds::clip`](super::ActionBounds::clip).
#[derive(Debug)]
pub struct DesignEnvironment {
    config: EnvConfig,
    model: SimulationModel,
    step_count: u32,
    last_observation: Observation,
    episode_id: Id,
    cumulative_reward: f64,
}

impl DesignEnvironment {
    /// Creates an environment over the default simulation constants.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        Self::with_model(config, SimulationModel::default())
    }

    /// Creates an environment over a specific simulation model.
    pub fn with_model(config: EnvConfig, model: SimulationModel) -> Result<Self, EnvError> {
        config.validate()?;
        let last_observation = config.initial_observation();
        Ok(Self {
            config,
            model,
            step_count: 0,
            last_observation,
            episode_id: generate_id(),
            cumulative_reward: 0.0,
        })
    }

    /// Starts a new episode and returns the canonical observation.
    pub fn reset(&mut self) -> Observation {
        self.step_count = 0;
        self.cumulative_reward = 0.0;
        self.episode_id = generate_id();
        self.last_observation = self.config.initial_observation();
        debug!("episode {} reset", self.episode_id);
        self.last_observation
    }

    /// Executes one design evaluation.
    ///
    /// # Errors
    ///
    /// [`EnvError::EpisodeDone`] once the horizon has been reached.
    pub fn step(&mut self, action: DesignAction) -> Result<StepResult, EnvError> {
        if self.is_done() {
            return Err(EnvError::EpisodeDone {
                max_steps: self.config.max_steps,
            });
        }
        if !self.config.action_bounds.contains(&action) {
            warn!(
                "episode {}: action {:?} outside advisory bounds, passing through",
                self.episode_id, action
            );
        }

        let prediction = self
            .model
            .predict_design(&action.design(), &self.config.context());
        let peg_penalty = RewardComputer::peg_penalty(action.peg_density, &self.config);
        let reward = RewardComputer::compute(&prediction, action.peg_density, &self.config);
        self.cumulative_reward += reward;

        self.step_count += 1;
        let terminated = self.is_done();

        let observation = Observation::from_action(&action, self.config.hypoxia_fraction);
        self.last_observation = observation;

        trace!(
            "episode {} step {}: days={:.3} reward={:.4}",
            self.episode_id,
            self.step_count,
            prediction.predicted_days(),
            reward
        );
        if terminated {
            debug!(
                "episode {} terminated after {} steps, return {:.4}",
                self.episode_id, self.step_count, self.cumulative_reward
            );
        }

        Ok(StepResult {
            observation,
            reward,
            terminated,
            truncated: false,
            step: self.step_count,
            prediction,
            peg_penalty,
        })
    }

    /// Steps with a flat `[size_nm, peg_density, charge]` vector.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidArgument`] on wrong arity, otherwise as [`step`](Self::step).
    pub fn step_slice(&mut self, action: &[f64]) -> Result<StepResult, EnvError> {
        self.step(DesignAction::from_slice(action)?)
    }

    /// Steps taken in the current episode.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// `true` once the horizon is reached.
    pub fn is_done(&self) -> bool {
        self.step_count >= self.config.max_steps
    }

    pub fn last_observation(&self) -> Observation {
        self.last_observation
    }

    /// Identifier of the current episode.
    pub fn episode_id(&self) -> &str {
        &self.episode_id
    }

    /// Sum of step rewards in the current episode.
    pub fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    /// Validated configuration this environment was built with.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn model(&self) -> &SimulationModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_env() -> DesignEnvironment {
        DesignEnvironment::new(EnvConfig::default()).unwrap()
    }

    fn env_with_horizon(max_steps: u32) -> DesignEnvironment {
        DesignEnvironment::new(EnvConfig {
            max_steps,
            ..EnvConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn reset_returns_canonical_observation() {
        let mut env = make_env();
        let obs = env.reset();
        assert_eq!(obs, Observation::canonical());
        assert_eq!(env.step_count(), 0);
        assert!(!env.is_done());
    }

    #[test]
    fn step_returns_valid_result() {
        let mut env = make_env();
        env.reset();
        let result = env.step(DesignAction::new(50.0, 0.1, 1.0)).unwrap();
        assert_eq!(result.step, 1);
        assert!(!result.terminated);
        assert!(!result.truncated);
        assert_eq!(result.observation.to_vec(), vec![50.0, 0.1, 1.0, 0.1]);
        assert_eq!(result.peg_penalty, 0.0);
        assert!((result.reward - (-1.7900207781647053)).abs() < 1e-9);
    }

    #[test]
    fn episode_terminates_at_horizon() {
        let mut env = env_with_horizon(5);
        env.reset();
        for t in 0..5 {
            let result = env.step(DesignAction::new(20.0, 0.1, 1.0)).unwrap();
            if t < 4 {
                assert!(!result.terminated);
            } else {
                assert!(result.terminated);
            }
        }
    }

    #[test]
    fn step_after_done_is_rejected() {
        let mut env = env_with_horizon(1);
        env.reset();
        assert!(env.step(DesignAction::new(20.0, 0.1, 1.0)).unwrap().terminated);
        let err = env.step(DesignAction::new(20.0, 0.1, 1.0)).unwrap_err();
        assert_eq!(err, EnvError::EpisodeDone { max_steps: 1 });
        assert_eq!(env.step_count(), 1);
    }

    #[test]
    fn wrong_arity_rejected_without_advancing() {
        let mut env = make_env();
        env.reset();
        let err = env.step_slice(&[50.0, 0.1]).unwrap_err();
        assert!(matches!(err, EnvError::InvalidArgument { actual: 2, .. }));
        assert_eq!(env.step_count(), 0);
    }

    #[test]
    fn out_of_bounds_action_passes_through() {
        let mut env = make_env();
        env.reset();
        let result = env.step(DesignAction::new(250.0, 1.5, 4.0)).unwrap();
        assert_eq!(result.observation.size_nm, 250.0);
        assert_eq!(result.observation.charge, 4.0);
        assert!((result.peg_penalty - 2.8).abs() < 1e-12);
    }

    #[test]
    fn reset_mints_new_episode_id() {
        let mut env = make_env();
        let first = env.episode_id().to_string();
        env.reset();
        assert_ne!(env.episode_id(), first);
    }

    #[test]
    fn reset_reports_scenario_hypoxia() {
        let mut env = DesignEnvironment::new(EnvConfig {
            hypoxia_fraction: 0.3,
            ..EnvConfig::default()
        })
        .unwrap();
        assert_eq!(env.last_observation().hypoxia_fraction, 0.3);
        let reset_obs = env.reset();
        let step_obs = env
            .step(DesignAction::new(50.0, 0.1, 1.0))
            .unwrap()
            .observation;
        assert_eq!(reset_obs.hypoxia_fraction, env.config().hypoxia_fraction);
        assert_eq!(reset_obs.hypoxia_fraction, step_obs.hypoxia_fraction);
    }

    #[test]
    fn config_getter_exposes_validated_config() {
        let env = env_with_horizon(7);
        assert_eq!(env.config().max_steps, 7);
        assert!(env.config().validate().is_ok());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = EnvConfig {
            max_steps: 0,
            ..EnvConfig::default()
        };
        assert!(DesignEnvironment::new(cfg).is_err());
    }
}
