use super::*;
use crate::simulation::{PhysiologicalContext, SimulationConstants, SimulationModel};

fn default_env() -> DesignEnvironment {
    DesignEnvironment::new(EnvConfig::default()).unwrap()
}

#[test]
fn fifty_steps_then_terminated() {
    let mut env = default_env();
    env.reset();
    for i in 1..=50 {
        let result = env.step(DesignAction::new(40.0, 0.1, 1.0)).unwrap();
        assert_eq!(result.terminated, i == 50, "step {i}");
        assert!(!result.truncated);
    }
    assert!(env.is_done());
}

#[test]
fn reset_after_done_reactivates() {
    let mut env = default_env();
    env.reset();
    for _ in 0..50 {
        env.step(DesignAction::new(40.0, 0.1, 1.0)).unwrap();
    }
    assert!(env.step(DesignAction::new(40.0, 0.1, 1.0)).is_err());

    let obs = env.reset();
    assert_eq!(obs, Observation::canonical());
    assert_eq!(env.step_count(), 0);
    assert_eq!(env.cumulative_reward(), 0.0);
    assert!(env.step(DesignAction::new(40.0, 0.1, 1.0)).is_ok());
}

#[test]
fn fresh_environment_can_step_without_reset() {
    let mut env = default_env();
    let result = env.step(DesignAction::new(50.0, 0.1, 1.0)).unwrap();
    assert_eq!(result.step, 1);
}

#[test]
fn observation_echoes_unvalidated_action() {
    let mut env = default_env();
    env.reset();
    let result = env.step_slice(&[-5.0, 0.5, 9.0]).unwrap();
    assert_eq!(result.observation.to_vec(), vec![-5.0, 0.5, 9.0, 0.1]);
    assert_eq!(env.last_observation(), result.observation);
}

#[test]
fn step_reward_is_pipeline_minus_peg_penalty() {
    let mut env = default_env();
    env.reset();
    let model = SimulationModel::default();
    for (size, peg, charge) in [(10.0, 0.0, 1.0), (60.0, 0.2, -1.0), (35.0, 0.8, 0.5)] {
        let result = env.step(DesignAction::new(size, peg, charge)).unwrap();
        let expected = model
            .predict(size, charge, &PhysiologicalContext::new(6.5, 0.1, true))
            .net_reward
            - 2.0 * (peg - 0.1f64).abs();
        assert!((result.reward - expected).abs() < 1e-12);
    }
}

#[test]
fn alternate_scenario_closes_release_gate() {
    let cfg = EnvConfig {
        tumor_ph: 7.2,
        ..EnvConfig::default()
    };
    let mut env = DesignEnvironment::new(cfg).unwrap();
    env.reset();
    let result = env.step(DesignAction::new(10.0, 0.1, 1.0)).unwrap();
    assert_eq!(result.prediction.predicted_days(), 0.0);
    assert_eq!(result.reward, -2.0);
}

#[test]
fn hypoxia_from_config_is_observed() {
    let cfg = EnvConfig {
        hypoxia_fraction: 0.3,
        ..EnvConfig::default()
    };
    let mut env = DesignEnvironment::new(cfg).unwrap();
    let result = env.step(DesignAction::new(50.0, 0.1, 1.0)).unwrap();
    assert_eq!(result.observation.hypoxia_fraction, 0.3);
}

#[test]
fn custom_constants_flow_through() {
    let constants = SimulationConstants {
        cationic_toxicity_factor: 3.0,
        ..SimulationConstants::default()
    };
    let mut env =
        DesignEnvironment::with_model(EnvConfig::default(), SimulationModel::new(constants))
            .unwrap();
    let result = env.step(DesignAction::new(50.0, 0.1, 1.0)).unwrap();
    assert_eq!(result.prediction.transport.toxicity, 3.0);
    assert_eq!(env.model().constants().cationic_toxicity_factor, 3.0);
}

#[test]
fn step_prediction_matches_design_pipeline() {
    let mut env = default_env();
    let action = DesignAction::new(25.0, 0.4, 1.0);
    let result = env.step(action).unwrap();
    let expected = env
        .model()
        .predict_design(&action.design(), &env.config().context());
    assert_eq!(result.prediction, expected);
    assert!(action.design().is_cationic());
}

#[test]
fn reset_and_step_agree_on_hypoxia_in_alternate_scenario() {
    let mut env = DesignEnvironment::new(EnvConfig {
        hypoxia_fraction: 0.3,
        ..EnvConfig::default()
    })
    .unwrap();
    let reset_obs = env.reset();
    let step_obs = env.step(DesignAction::new(50.0, 0.1, 1.0)).unwrap().observation;
    assert_eq!(reset_obs.hypoxia_fraction, 0.3);
    assert_eq!(reset_obs.hypoxia_fraction, step_obs.hypoxia_fraction);
    assert_eq!(reset_obs.design_action(), env.config().initial_design);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = EnvConfig {
            max_steps: 12,
            fus_pressure_kpa: Some(300.0),
            ..EnvConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cfg);
    }

    #[test]
    fn action_serializes_by_field() {
        let json = serde_json::to_value(DesignAction::new(50.0, 0.1, 1.0)).unwrap();
        assert_eq!(json["size_nm"], 50.0);
        assert_eq!(json["peg_density"], 0.1);
        assert_eq!(json["charge"], 1.0);
    }
}
