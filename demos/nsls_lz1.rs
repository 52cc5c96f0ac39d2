use std::error::Error;

use log::LevelFilter;

use nsls::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
use nsls::core::builtin_problems::LZ1Problem;
use nsls::core::Population;
use nsls::metrics::{gdps, Distance};

/// Solve the LZ1 problem with 30 variables bounded to [0, 1], stepping the algorithm manually
/// with [`NSLS::single_step`] and reporting the quality metrics every 50 generations. The Pareto
/// front is `f_2 = 1 - sqrt(f_1)` with `f_1` in [0, 1].
///
/// Make sure to compile this in release mode to speed up the calculation:
///
/// `cargo run --example nsls_lz1 --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Warn).init();

    let problem = LZ1Problem::create(30)?;
    let args = NSLSArg {
        number_of_individuals: 100,
        // not used when stepping manually
        stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(250)),
        updater_options: None,
        dominance_policy: None,
        front_selector: None,
        population_granularity: None,
        seed: Some(1),
    };
    let mut algo = NSLS::new(problem, args)?;
    algo.initialise()?;

    let reference_front: Vec<Vec<f64>> = (0..=500)
        .map(|i| {
            let f1 = i as f64 / 500.0;
            vec![f1, 1.0 - f1.sqrt()]
        })
        .collect();

    let mut population: Population = algo.population().clone();
    for generation in 1..=250 {
        algo.single_step(&mut population)?;
        if generation % 50 == 0 {
            let metric = Distance::new(population.individuals(), &reference_front)?;
            println!(
                "Generation #{generation}: IGD = {:.6}, convergence = {:.6}, GDPS = {:.6}",
                metric.igd()?,
                metric.convergence()?,
                gdps(population.individuals())?
            );
        }
    }

    Ok(())
}
