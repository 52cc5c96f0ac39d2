use std::env;
use std::error::Error;
use std::fs;

use log::LevelFilter;

use nsls::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
use nsls::core::builtin_problems::ZDT1Problem;
use nsls::metrics::{gdps, Distance};

/// Solve the ZDT1 problem where the following 2 objectives are minimised:
/// - `f_1(x) = x_1`
/// - `f_2(x) = g(x) * [ 1 - sqrt( x_1 / g(x) ) ]`
/// with
///  `g(x) = 1 + 9 * ( Sum_i=2^n x_i ) / (n - 1)`
/// The problem vector (`x`) has `n=30` variables bounded to [0, 1]. The optimal solution is
/// expected to be 0 for all `x_i` with `i > 1`.
///
/// Make sure to compile this in release mode to speed up the calculation:
///
/// `cargo run --example nsls_zdt1 --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // Load the built-in problem.
    let number_of_variables: usize = 30;
    let problem = ZDT1Problem::create(number_of_variables)?;

    // Setup and run the NSLS algorithm
    let args = NSLSArg {
        number_of_individuals: 100,
        stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(250)),
        updater_options: None,
        dominance_policy: None,
        front_selector: None,
        population_granularity: None,
        // to reproduce results
        seed: Some(10),
    };
    let mut algo = NSLS::new(problem, args)?;
    algo.run()?;
    let results = algo.get_results();

    // Compare the results against the Pareto front f_2 = 1 - sqrt(f_1)
    let reference_front: Vec<Vec<f64>> = (0..=500)
        .map(|i| {
            let f1 = i as f64 / 500.0;
            vec![f1, 1.0 - f1.sqrt()]
        })
        .collect();
    let metric = Distance::new(&results.individuals, &reference_front)?;
    println!("IGD = {}", metric.igd()?);
    println!("GD = {}", metric.gd()?);
    println!("Convergence = {}", metric.convergence()?);
    println!("Diversity = {}", metric.diversity()?);
    println!("GDPS = {}", gdps(&results.individuals)?);

    // Export serialised results at last generation
    let out_path = env::current_dir()?.join("demos").join("results");
    fs::create_dir_all(&out_path)?;
    algo.save_to_json(&out_path, Some("ZDT1_2obj"))?;

    Ok(())
}
