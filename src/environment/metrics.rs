//! Rollout evaluation of a policy in the design environment.
//!
//! Runs whole episodes and aggregates episode returns, step rewards and
//! the best design encountered.

use std::fmt;

use log::info;

use super::action::DesignAction;
use super::design_env::DesignEnvironment;
use super::error::EnvError;
use super::policy::Policy;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Mean episode return.
    pub mean_cumulative_reward: f64,
    /// Mean reward per step over all episodes.
    pub mean_step_reward: f64,
    /// Mean predicted survival per step (days).
    pub mean_predicted_days: f64,
    /// Highest single-step reward seen.
    pub best_reward: f64,
    /// Design that achieved `best_reward`.
    pub best_action: Option<DesignAction>,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
    /// Total steps taken.
    pub n_steps: usize,
}

impl EvaluationMetrics {
    /// Evaluates a policy over `n_episodes` full episodes.
    ///
    /// # Arguments
    ///
    /// * `env` - The design environment to evaluate in
    /// * `policy` - The policy to evaluate
    /// * `n_episodes` - Number of episodes to run
    pub fn evaluate(
        env: &mut DesignEnvironment,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> Result<Self, EnvError> {
        let mut returns = Vec::with_capacity(n_episodes);
        let mut reward_sum = 0.0;
        let mut days_sum = 0.0;
        let mut n_steps = 0usize;
        let mut best_reward = f64::NEG_INFINITY;
        let mut best_action = None;

        for _ in 0..n_episodes {
            let mut obs = env.reset();
            loop {
                let action = policy.select_action(&obs);
                let result = env.step(action)?;

                reward_sum += result.reward;
                days_sum += result.prediction.predicted_days();
                n_steps += 1;
                if result.reward > best_reward {
                    best_reward = result.reward;
                    best_action = Some(action);
                }

                obs = result.observation;
                if result.terminated || result.truncated {
                    break;
                }
            }
            returns.push(env.cumulative_reward());
        }

        let mean = |sum: f64, n: usize| if n > 0 { sum / n as f64 } else { 0.0 };
        let metrics = Self {
            mean_cumulative_reward: mean(returns.iter().sum(), returns.len()),
            mean_step_reward: mean(reward_sum, n_steps),
            mean_predicted_days: mean(days_sum, n_steps),
            best_reward: if n_steps > 0 { best_reward } else { 0.0 },
            best_action,
            n_episodes,
            n_steps,
        };

        info!(
            "evaluated '{}' over {} episodes: mean return {:.3}, best step {:.3}",
            policy.name(),
            metrics.n_episodes,
            metrics.mean_cumulative_reward,
            metrics.best_reward
        );
        Ok(metrics)
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes, {} steps) ===",
            self.n_episodes, self.n_steps
        )?;
        writeln!(
            f,
            "  Mean episode return:     {:.3}",
            self.mean_cumulative_reward
        )?;
        writeln!(f, "  Mean step reward:        {:.4}", self.mean_step_reward)?;
        writeln!(
            f,
            "  Mean predicted survival: {:.1} days",
            self.mean_predicted_days
        )?;
        write!(f, "  Best step reward:        {:.4}", self.best_reward)?;
        if let Some(a) = &self.best_action {
            write!(
                f,
                "\n  Best design:             size={:.1}nm peg={:.2} charge={:.2}",
                a.size_nm, a.peg_density, a.charge
            )?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{ActionBounds, ConstantPolicy, EnvConfig, RandomPolicy};

    fn make_env(max_steps: u32) -> DesignEnvironment {
        DesignEnvironment::new(EnvConfig {
            max_steps,
            ..EnvConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn evaluate_completes() {
        let mut env = make_env(10);
        let mut policy = RandomPolicy::new(ActionBounds::default(), 42);
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 3).unwrap();
        assert_eq!(metrics.n_episodes, 3);
        assert_eq!(metrics.n_steps, 30);
        assert!(metrics.best_action.is_some());
        assert!(metrics.best_reward >= metrics.mean_step_reward);
    }

    #[test]
    fn constant_policy_return_is_horizon_times_step_reward() {
        let mut env = make_env(50);
        let mut policy = ConstantPolicy::canonical();
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 2).unwrap();
        let step = -1.7900207781647053;
        assert!((metrics.mean_step_reward - step).abs() < 1e-9);
        assert!((metrics.mean_cumulative_reward - 50.0 * step).abs() < 1e-6);
        assert!((metrics.best_reward - step).abs() < 1e-9);
    }

    #[test]
    fn zero_episodes() {
        let mut env = make_env(5);
        let mut policy = ConstantPolicy::canonical();
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 0).unwrap();
        assert_eq!(metrics.n_steps, 0);
        assert_eq!(metrics.mean_cumulative_reward, 0.0);
        assert!(metrics.best_action.is_none());
    }

    #[test]
    fn display_mentions_best_design() {
        let mut env = make_env(3);
        let mut policy = ConstantPolicy::canonical();
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 1).unwrap();
        let text = metrics.to_string();
        assert!(text.contains("Evaluation Metrics (1 episodes, 3 steps)"));
        assert!(text.contains("size=50.0nm"));
    }
}
