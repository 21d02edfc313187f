// Demonstration: evaluate a baseline policy in the design environment and
// print the size × charge reward landscape.
//
// Run from the repo root:
//   RUST_LOG=info cargo run --example design_search -- --policy random --episodes 20 --seed 7

use std::env;

use neurocarrier::environment::{
    ActionBounds, ConstantPolicy, DesignEnvironment, EnvConfig, EvaluationMetrics, Policy,
    RandomPolicy,
};
use neurocarrier::simulation::{
    optimal_size, sizes_inclusive, PhysiologicalContext, ResponseSurface, SimulationModel,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("random");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = EnvConfig::default();
    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(config.action_bounds, seed)),
        "constant" => Box::new(ConstantPolicy::canonical()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'random' or 'constant'.", other);
            std::process::exit(2);
        }
    };

    let mut design_env = match DesignEnvironment::new(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match EvaluationMetrics::evaluate(&mut design_env, policy.as_mut(), episodes) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(e) => {
            eprintln!("evaluation failed: {e}");
            std::process::exit(1);
        }
    }

    let model = SimulationModel::default();
    let context = PhysiologicalContext::default();
    let bounds = ActionBounds::default();
    let sizes = sizes_inclusive(bounds.low[0], bounds.high[0], 5.0);

    if let Some(best) = optimal_size(&model, &sizes_inclusive(10.0, 115.0, 5.0), 1.0, &context) {
        println!(
            "Best cationic size: {:.0} nm ({:.0} days, reward {:.2})",
            best.size_nm, best.predicted_days, best.net_reward
        );
    }

    let surface = ResponseSurface::compute(&model, &sizes, &[-1.0, 0.0, 1.0], &context);
    if let Some((size, charge, reward)) = surface.max() {
        println!(
            "Landscape optimum: size={:.0}nm charge={:+.0} reward={:.2}",
            size, charge, reward
        );
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
