use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::core::{Individual, NslsError, Problem};
use crate::operators::BinaryComparisonOperator;

/// Trait to define an operator that moves the individuals of a population to new solutions.
pub trait Updater {
    /// Update the individuals in place. This returns an error if the variables of an individual
    /// do not match the problem variables.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The individuals to update.
    /// * `problem`: The problem being solved, used to evaluate the new solutions.
    /// * `operator`: The operator assessing the dominance between two individuals.
    /// * `rng`: The random number generator.
    ///
    /// returns: `Result<(), NslsError>`.
    fn update(
        &self,
        individuals: &mut [Individual],
        problem: &Problem,
        operator: &dyn BinaryComparisonOperator,
        rng: &mut dyn RngCore,
    ) -> Result<(), NslsError>;
}

/// Input arguments for [`NSLSUpdater`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NSLSUpdaterArgs {
    /// The mean of the normal distribution the step scale is drawn from.
    pub scale_mean: f64,
    /// The standard deviation of the normal distribution the step scale is drawn from.
    pub scale_std_dev: f64,
}

impl Default for NSLSUpdaterArgs {
    /// Default parameters for the local search with a mean of 0.5 and a standard deviation of
    /// 0.1.
    fn default() -> Self {
        Self {
            scale_mean: 0.5,
            scale_std_dev: 0.1,
        }
    }
}

/// The local search operator of the Non-dominated Sorting and Local Search (NSLS) algorithm.
///
/// For each individual and each of its variables (one after the other, so that a change to a
/// variable is used when the next one is perturbed), two neighbours are created by moving the
/// variable forwards and backwards by the scaled difference between the same variable of two
/// random individuals. The step scale is drawn from a normal distribution and the new values are
/// clamped to the variable bounds. The neighbour replacing the individual is chosen as follows:
///  - a neighbour dominating the individual is accepted (a random one when both do);
///  - otherwise, a non-dominated neighbour is accepted if the other one is dominated by the
///    individual (a random one when both are non-dominated);
///  - otherwise, the individual is kept.
///
/// Implemented based on:
/// > B. Chen, W. Zeng, Y. Lin and D. Zhang, "A New Local Search-Based Multiobjective Optimization
/// > Algorithm," in IEEE Transactions on Evolutionary Computation, vol. 19, no. 1, pp. 50-73,
/// > Feb. 2015, doi: 10.1109/TEVC.2014.2301794.
///
/// # Example
///
/// ```
/// use std::error::Error;
/// use nsls::core::builtin_problems::SCHProblem;
/// use nsls::core::utils::get_rng;
/// use nsls::core::Population;
/// use nsls::operators::{NSLSUpdater, NSLSUpdaterArgs, ParetoDominance, Updater};
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let problem = SCHProblem::create()?;
///     let mut rng = get_rng(Some(1));
///     let mut population = Population::init_random(&problem, 8, rng.as_mut())?;
///
///     let updater = NSLSUpdater::new(NSLSUpdaterArgs::default())?;
///     updater.update(
///         population.individuals_as_mut(),
///         &problem,
///         &ParetoDominance,
///         rng.as_mut(),
///     )?;
///     assert_eq!(population.len(), 8);
///     Ok(())
/// }
/// ```
pub struct NSLSUpdater {
    /// The distribution of the step scale.
    scale: Normal<f64>,
}

impl NSLSUpdater {
    /// Initialise the operator. This returns an error if the mean is not finite or the standard
    /// deviation is negative or not finite.
    ///
    /// # Arguments
    ///
    /// * `args`: The [`NSLSUpdaterArgs`].
    ///
    /// returns: `Result<NSLSUpdater, NslsError>`
    pub fn new(args: NSLSUpdaterArgs) -> Result<Self, NslsError> {
        let name = "NSLSUpdater".to_string();
        if !args.scale_mean.is_finite() {
            return Err(NslsError::UpdaterOperator(
                name,
                format!("The scale mean {} must be a finite number", args.scale_mean),
            ));
        }
        if !args.scale_std_dev.is_finite() || args.scale_std_dev < 0.0 {
            return Err(NslsError::UpdaterOperator(
                name,
                format!(
                    "The scale standard deviation {} must be a finite non-negative number",
                    args.scale_std_dev
                ),
            ));
        }
        let scale = Normal::new(args.scale_mean, args.scale_std_dev)
            .map_err(|e| NslsError::UpdaterOperator(name, e.to_string()))?;
        Ok(Self { scale })
    }

    /// Draw two distinct random indexes. Both are `0` when there is only one individual.
    ///
    /// # Arguments
    ///
    /// * `size`: The population size.
    /// * `rng`: The random number generator.
    ///
    /// returns: `(usize, usize)`
    fn pick_pair(size: usize, rng: &mut dyn RngCore) -> (usize, usize) {
        if size < 2 {
            return (0, 0);
        }
        let r1 = rng.gen_range(0..size);
        let mut r2 = rng.gen_range(0..size - 1);
        if r2 >= r1 {
            r2 += 1;
        }
        (r1, r2)
    }

    /// Create a neighbour by replacing one variable and evaluating the new solution.
    fn neighbour(
        individual: &Individual,
        problem: &Problem,
        variable_idx: usize,
        value: f64,
    ) -> Result<Individual, NslsError> {
        let mut neighbour = individual.clone();
        neighbour.update_variable(variable_idx, value)?;
        neighbour.evaluate(problem)?;
        Ok(neighbour)
    }
}

impl Updater for NSLSUpdater {
    fn update(
        &self,
        individuals: &mut [Individual],
        problem: &Problem,
        operator: &dyn BinaryComparisonOperator,
        rng: &mut dyn RngCore,
    ) -> Result<(), NslsError> {
        for individual in individuals.iter() {
            problem.check_variables(individual.variables())?;
        }

        let size = individuals.len();
        for i in 0..size {
            for (j, variable) in problem.variables().iter().enumerate() {
                let (r1, r2) = Self::pick_pair(size, rng);
                let scale = self.scale.sample(rng);
                let step = scale * (individuals[r1].variables()[j] - individuals[r2].variables()[j]);

                let current = &individuals[i];
                let value = current.variables()[j];
                let a1 = Self::neighbour(current, problem, j, variable.clamp(value + step))?;
                let a2 = Self::neighbour(current, problem, j, variable.clamp(value - step))?;

                let t1 = operator.compare(&a1, current)?.as_sign();
                let t2 = operator.compare(&a2, current)?.as_sign();
                let accepted = match (t1, t2) {
                    (1, 1) | (0, 0) => {
                        if rng.gen_bool(0.5) {
                            Some(a1)
                        } else {
                            Some(a2)
                        }
                    }
                    (1, _) | (0, -1) => Some(a1),
                    (_, 1) | (-1, 0) => Some(a2),
                    _ => None,
                };
                if let Some(accepted) = accepted {
                    individuals[i] = accepted;
                }
            }
        }
        Ok(())
    }
}
