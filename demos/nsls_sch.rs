use std::env;
use std::error::Error;
use std::fs;

use log::LevelFilter;

use nsls::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
use nsls::core::builtin_problems::SCHProblem;

/// Solve the Schaffer’s problem (SCH) where the following 2 objectives are minimised:
/// - `f_1(x) = x^2`
/// - `f_2(x) = (x - 2)^2`
///
/// The problem has 1 variable (`x`) bounded to -1000 and 1000. The optimal solution is expected
/// to lie in the [0; 2] range.
///
/// Make sure to compile this in release mode to speed up the calculation:
///
/// `cargo run --example nsls_sch --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // Load the built-in problem.
    let problem = SCHProblem::create()?;

    // Setup and run the NSLS algorithm
    let args = NSLSArg {
        number_of_individuals: 40,
        stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(250)),
        // use the default normal distribution for the step scale
        updater_options: None,
        // compare the objectives only
        dominance_policy: None,
        // truncate the last front with the farthest-candidate selector
        front_selector: None,
        population_granularity: None,
        // to reproduce results
        seed: Some(10),
    };
    let mut algo = NSLS::new(problem, args)?;
    algo.run()?;

    let results = algo.get_results();
    println!("{results}");
    for (i, individual) in results.individuals.iter().enumerate() {
        println!(
            "Individual #{} {:?} - {:?}",
            i + 1,
            individual.variables(),
            individual.objectives()
        );
    }

    // Export serialised results at last generation
    let out_path = env::current_dir()?.join("demos").join("results");
    fs::create_dir_all(&out_path)?;
    algo.save_to_json(&out_path, Some("SCH_2obj"))?;

    Ok(())
}
