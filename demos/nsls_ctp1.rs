use std::error::Error;

use log::LevelFilter;

use nsls::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
use nsls::core::builtin_problems::CTP1Problem;
use nsls::operators::DominancePolicy;

/// Solve the constrained CTP1 problem with 4 variables. The problem constraints are only
/// considered when the dominance policy is set to [`DominancePolicy::ConstraintsFirst`]; this
/// runs the algorithm with both policies and reports the number of feasible solutions.
///
/// `cargo run --example nsls_ctp1 --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    for policy in [DominancePolicy::ObjectivesOnly, DominancePolicy::ConstraintsFirst] {
        let problem = CTP1Problem::create(4)?;
        let args = NSLSArg {
            number_of_individuals: 60,
            stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(200)),
            updater_options: None,
            dominance_policy: Some(policy.clone()),
            front_selector: None,
            population_granularity: None,
            seed: Some(3),
        };
        let mut algo = NSLS::new(problem, args)?;
        algo.run()?;

        let results = algo.get_results();
        let feasible = results
            .individuals
            .iter()
            .filter(|i| i.is_feasible(&results.problem))
            .count();
        println!(
            "{:?}: {} feasible solutions out of {}",
            policy,
            feasible,
            results.individuals.len()
        );
    }

    Ok(())
}
