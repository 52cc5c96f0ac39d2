use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::algorithms::{Algorithm, StoppingConditionType};
use crate::core::utils::get_rng;
use crate::core::{NslsError, Population, Problem};
use crate::operators::{
    DominancePolicy, FrontSelectorType, NSLSUpdater, NSLSUpdaterArgs,
    NonDominatedSortingSelector, Updater,
};

/// The population size is rounded up to a multiple of this number.
pub const DEFAULT_POPULATION_GRANULARITY: usize = 4;

/// Input arguments for the NSLS algorithm.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NSLSArg {
    /// The number of individuals to use in the population. This is rounded up to the next
    /// multiple of `population_granularity`.
    pub number_of_individuals: usize,
    /// The condition to use when to terminate the algorithm.
    pub stopping_condition: StoppingConditionType,
    /// The options of the local search operator. This defaults to
    /// [`NSLSUpdaterArgs::default()`], with the step scale drawn from a normal distribution with
    /// mean `0.5` and standard deviation `0.1`.
    pub updater_options: Option<NSLSUpdaterArgs>,
    /// How solutions are compared. This defaults to [`DominancePolicy::ObjectivesOnly`]; the
    /// problem constraints are ignored unless [`DominancePolicy::ConstraintsFirst`] is set.
    pub dominance_policy: Option<DominancePolicy>,
    /// The strategy to use to truncate the last front during selection. This defaults to
    /// [`FrontSelectorType::FarthestCandidate`].
    pub front_selector: Option<FrontSelectorType>,
    /// The population size is rounded up to a multiple of this number. This defaults to
    /// [`DEFAULT_POPULATION_GRANULARITY`].
    pub population_granularity: Option<usize>,
    /// The seed used in the random number generator (RNG). You can specify a seed in case you
    /// want to try to reproduce results. When `None`, the default seed is used.
    pub seed: Option<u64>,
}

/// The Non-dominated Sorting and Local Search (NSLS) algorithm.
///
/// At each generation, every individual is moved by the local search operator ([`NSLSUpdater`])
/// to create the offspring; parents and offspring are then merged and reduced to the
/// population size by elitist selection ([`NonDominatedSortingSelector`]), truncating the last
/// front with the farthest-candidate approach.
///
/// Implemented based on:
/// > B. Chen, W. Zeng, Y. Lin and D. Zhang, "A New Local Search-Based Multiobjective Optimization
/// > Algorithm," in IEEE Transactions on Evolutionary Computation, vol. 19, no. 1, pp. 50-73,
/// > Feb. 2015, doi: 10.1109/TEVC.2014.2301794.
///
/// # Examples
/// ## Solve the Schaffer’s problem
/// ```rust
#[doc = include_str!("../../demos/nsls_sch.rs")]
/// ```
pub struct NSLS {
    /// The number of individuals in the population.
    number_of_individuals: usize,
    /// The population with the solutions.
    population: Population,
    /// The problem being solved.
    problem: Arc<Problem>,
    /// The local search operator creating the offspring.
    updater_operator: NSLSUpdater,
    /// The elitist selector.
    survival_operator: NonDominatedSortingSelector,
    /// How solutions are compared.
    dominance_policy: DominancePolicy,
    /// The evolution step.
    generation: usize,
    /// The stopping condition.
    stopping_condition: StoppingConditionType,
    /// The time when the algorithm started.
    start_time: Instant,
    /// The random number generator.
    rng: Box<dyn RngCore>,
    /// The algorithm options.
    args: NSLSArg,
}

impl Display for NSLS {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl NSLS {
    /// Initialise the NSLS algorithm. This returns an error if the number of individuals or the
    /// population granularity is `0`, or if the updater options are not valid.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `options`: The [`NSLSArg`] arguments to customise the algorithm behaviour.
    ///
    /// returns: `Result<NSLS, NslsError>`.
    pub fn new(problem: Problem, options: NSLSArg) -> Result<Self, NslsError> {
        let rng = get_rng(options.seed);
        Self::new_with_rng(problem, options, rng)
    }

    /// Initialise the NSLS algorithm with a random number generator created by the caller. The
    /// `seed` in the options is not used. This returns an error in the same cases as
    /// [`NSLS::new`].
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `options`: The [`NSLSArg`] arguments to customise the algorithm behaviour.
    /// * `rng`: The generator used to initialise and update the population.
    ///
    /// returns: `Result<NSLS, NslsError>`.
    pub fn new_with_rng(
        problem: Problem,
        options: NSLSArg,
        rng: Box<dyn RngCore>,
    ) -> Result<Self, NslsError> {
        let name = "NSLS".to_string();
        if options.number_of_individuals == 0 {
            return Err(NslsError::AlgorithmInit(
                name,
                "The population size must have at least 1 individual".to_string(),
            ));
        }
        let granularity = options
            .population_granularity
            .unwrap_or(DEFAULT_POPULATION_GRANULARITY);
        if granularity == 0 {
            return Err(NslsError::AlgorithmInit(
                name,
                "The population granularity must be at least 1".to_string(),
            ));
        }
        let number_of_individuals = options.number_of_individuals.div_ceil(granularity) * granularity;
        if number_of_individuals != options.number_of_individuals {
            info!(
                "The population size was rounded from {} to {} individuals",
                options.number_of_individuals, number_of_individuals
            );
        }

        let updater_options = options.updater_options.clone().unwrap_or_default();
        let updater_operator = NSLSUpdater::new(updater_options.clone())?;
        let front_selector = options.front_selector.clone().unwrap_or_default();
        let dominance_policy = options.dominance_policy.clone().unwrap_or_default();

        let problem = Arc::new(problem);
        info!(
            "{}",
            Self::algorithm_option_str(
                &problem,
                number_of_individuals,
                &updater_options,
                &front_selector,
                &dominance_policy
            )
        );

        Ok(Self {
            number_of_individuals,
            population: Population::new(),
            problem,
            updater_operator,
            survival_operator: NonDominatedSortingSelector::new(&front_selector),
            dominance_policy,
            generation: 0,
            stopping_condition: options.stopping_condition.clone(),
            start_time: Instant::now(),
            rng,
            args: options,
        })
    }

    /// Get a string listing the algorithm options.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem.
    /// * `number_of_individuals`: The population size.
    /// * `updater_options`: The local search operator options.
    /// * `front_selector`: The strategy truncating the last front.
    /// * `dominance_policy`: How solutions are compared.
    ///
    /// returns: `String`
    pub fn algorithm_option_str(
        problem: &Arc<Problem>,
        number_of_individuals: usize,
        updater_options: &NSLSUpdaterArgs,
        front_selector: &FrontSelectorType,
        dominance_policy: &DominancePolicy,
    ) -> String {
        let mut log_opts: String = "Algorithm options are:\n".to_owned();
        log_opts.push_str(
            format!("\t* Number of variables {:>13}\n\t* Number of objectives {:>12}\n\t* Number of constraints {:>11}\n\t* Number of individuals {:>11}\n",
                    problem.number_of_variables(),
                    problem.number_of_objectives(),
                    problem.number_of_constraints(),
                    number_of_individuals,
            ).as_str()
        );
        log_opts.push_str(
            format!(
                "\t* Step scale mean {:>17}\n\t* Step scale std dev {:>14}\n\t* Front selector {:?}\n\t* Dominance {:?}",
                updater_options.scale_mean,
                updater_options.scale_std_dev,
                front_selector,
                dominance_policy,
            )
            .as_str(),
        );
        log_opts
    }

    /// Get the population size after rounding.
    ///
    /// returns: `usize`
    pub fn number_of_individuals(&self) -> usize {
        self.number_of_individuals
    }

    /// Evolve a population by one generation. The local search operator creates the offspring
    /// from a copy of the population; parents and offspring are merged and the elitist selector
    /// picks the individuals forming the new population. Nothing happens when the population is
    /// empty.
    ///
    /// # Arguments
    ///
    /// * `population`: The population to evolve. This is replaced by the new population.
    ///
    /// returns: `Result<(), NslsError>`
    pub fn single_step(&mut self, population: &mut Population) -> Result<(), NslsError> {
        if population.is_empty() {
            debug!("The population is empty. Nothing to evolve");
            return Ok(());
        }
        let operator = self.dominance_policy.operator(&self.problem);

        debug!("Generating offspring with local search");
        let mut offspring = population.individuals().to_vec();
        self.updater_operator.update(
            &mut offspring,
            &self.problem,
            operator.as_ref(),
            self.rng.as_mut(),
        )?;

        debug!("Combining parents and offspring");
        let mut union = population.individuals().to_vec();
        union.extend(offspring);
        debug!("New population size is {}", union.len());

        debug!("Selecting best individuals");
        let selected =
            self.survival_operator
                .select(&union, self.number_of_individuals, operator.as_ref())?;
        *population = Population::new_with(selected);

        self.generation += 1;
        Ok(())
    }
}

impl Algorithm<NSLSArg> for NSLS {
    /// Create the random initial population.
    ///
    /// return: `Result<(), NslsError>`
    fn initialise(&mut self) -> Result<(), NslsError> {
        self.start_time = Instant::now();
        self.population =
            Population::init_random(&self.problem, self.number_of_individuals, self.rng.as_mut())?;
        self.generation = 0;
        info!("Created initial random population");
        Ok(())
    }

    fn evolve(&mut self) -> Result<(), NslsError> {
        let mut population = std::mem::take(&mut self.population);
        let result = self.single_step(&mut population);
        self.population = population;
        result
    }

    fn generation(&self) -> usize {
        self.generation
    }

    fn name(&self) -> String {
        "NSLS".to_string()
    }

    fn start_time(&self) -> &Instant {
        &self.start_time
    }

    fn stopping_condition(&self) -> &StoppingConditionType {
        &self.stopping_condition
    }

    fn population(&self) -> &Population {
        &self.population
    }

    fn problem(&self) -> Arc<Problem> {
        self.problem.clone()
    }

    fn algorithm_options(&self) -> NSLSArg {
        self.args.clone()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
    use crate::core::builtin_problems::{SCHProblem, ZDT1Problem};
    use crate::core::utils::get_rng;
    use crate::core::{Individual, NslsError, Population};

    fn args(number_of_individuals: usize) -> NSLSArg {
        NSLSArg {
            number_of_individuals,
            stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(5)),
            updater_options: None,
            dominance_policy: None,
            front_selector: None,
            population_granularity: None,
            seed: Some(1),
        }
    }

    #[test]
    /// The population size is rounded up to the next multiple of the granularity.
    fn test_population_size() {
        let algo = NSLS::new(SCHProblem::create().unwrap(), args(97)).unwrap();
        assert_eq!(algo.number_of_individuals(), 100);
        let algo = NSLS::new(SCHProblem::create().unwrap(), args(100)).unwrap();
        assert_eq!(algo.number_of_individuals(), 100);

        let mut options = args(97);
        options.population_granularity = Some(1);
        let algo = NSLS::new(SCHProblem::create().unwrap(), options).unwrap();
        assert_eq!(algo.number_of_individuals(), 97);

        let mut options = args(10);
        options.population_granularity = Some(0);
        assert!(NSLS::new(SCHProblem::create().unwrap(), options).is_err());
        assert!(NSLS::new(SCHProblem::create().unwrap(), args(0)).is_err());
    }

    #[test]
    /// The initial population has the rounded size and evaluated individuals.
    fn test_initialise() {
        let problem = ZDT1Problem::create(5).unwrap();
        let mut algo = NSLS::new(problem, args(97)).unwrap();
        algo.initialise().unwrap();

        assert_eq!(algo.population().len(), 100);
        assert_eq!(algo.generation(), 0);
        for individual in algo.population().individuals() {
            assert!(algo.problem().check_variables(individual.variables()).is_ok());
            assert_eq!(individual.objectives().len(), 2);
        }
    }

    #[test]
    /// An empty population is not evolved.
    fn test_single_step_empty() {
        let mut algo = NSLS::new(SCHProblem::create().unwrap(), args(8)).unwrap();
        let mut population = Population::new();
        algo.single_step(&mut population).unwrap();
        assert!(population.is_empty());
        assert_eq!(algo.generation(), 0);
    }

    #[test]
    /// One step keeps the population size and sorts the individuals by front.
    fn test_single_step() {
        let mut algo = NSLS::new(ZDT1Problem::create(4).unwrap(), args(10)).unwrap();
        algo.initialise().unwrap();
        algo.evolve().unwrap();

        assert_eq!(algo.generation(), 1);
        assert_eq!(algo.population().len(), 12);
        let ranks: Vec<usize> = algo
            .population()
            .individuals()
            .iter()
            .map(|i| i.rank())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    /// A population with individuals not matching the problem is not evolved.
    fn test_single_step_wrong_individuals() {
        let mut algo = NSLS::new(SCHProblem::create().unwrap(), args(4)).unwrap();
        let mut population = Population::new_with(vec![
            Individual::new(vec![], vec![0.0, 1.0], vec![]),
            Individual::new(vec![0.5], vec![0.25, 2.25], vec![]),
        ]);
        assert!(matches!(
            algo.single_step(&mut population),
            Err(NslsError::WrongLength(_, 0, 1))
        ));
        assert_eq!(population.len(), 2);
        assert_eq!(algo.generation(), 0);
    }

    #[test]
    /// A generator passed by the caller is used in place of the seed.
    fn test_new_with_rng() {
        let results = |algo: &mut NSLS| {
            algo.run().unwrap();
            algo.get_results().objectives()
        };
        let mut seeded = NSLS::new(SCHProblem::create().unwrap(), args(8)).unwrap();

        let mut options = args(8);
        options.seed = Some(999);
        let mut injected =
            NSLS::new_with_rng(SCHProblem::create().unwrap(), options, get_rng(Some(1))).unwrap();
        assert_eq!(results(&mut seeded), results(&mut injected));

        let options = args(0);
        assert!(NSLS::new_with_rng(SCHProblem::create().unwrap(), options, get_rng(None)).is_err());
    }

    #[test]
    /// The same seed reproduces the same results.
    fn test_seed() {
        let run = || {
            let mut algo = NSLS::new(SCHProblem::create().unwrap(), args(8)).unwrap();
            algo.run().unwrap();
            algo.get_results().objectives()
        };
        assert_eq!(run(), run());
    }

    #[test]
    /// Export and read the results.
    fn test_save_to_json() {
        let mut algo = NSLS::new(SCHProblem::create().unwrap(), args(8)).unwrap();
        algo.run().unwrap();

        let destination = std::env::temp_dir();
        let file = algo.save_to_json(&destination, Some("Test")).unwrap();
        assert!(file.ends_with("Test_NSLS_gen5.json"));

        let data = NSLS::read_results(&file).unwrap();
        assert_eq!(data.generation, 5);
        assert_eq!(data.algorithm, "NSLS");
        assert_eq!(data.individuals.len(), 8);
        assert_eq!(data.options.number_of_individuals, 8);
        assert_eq!(data.problem.number_of_variables, 1);
        assert!(algo
            .save_to_json(&destination.join("not_a_folder_nsls"), None)
            .is_err());
    }
}

#[cfg(test)]
mod test_problems {
    use crate::algorithms::{Algorithm, MaxGeneration, NSLSArg, StoppingConditionType, NSLS};
    use crate::core::builtin_problems::{SCHProblem, ZDT1Problem};
    use crate::core::test_utils::check_value_in_range;
    use crate::metrics::Distance;

    #[test]
    /// Test problem 1 from Deb et al. (2002). Optional solution x in [0; 2]
    fn test_sch_problem() {
        let problem = SCHProblem::create().unwrap();
        let args = NSLSArg {
            number_of_individuals: 20,
            stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(300)),
            updater_options: None,
            dominance_policy: None,
            front_selector: None,
            population_granularity: None,
            seed: Some(10),
        };
        let mut algo = NSLS::new(problem, args).unwrap();
        algo.run().unwrap();
        let results = algo.get_results();

        // increase tolerance
        let bounds = -0.1..2.1;
        let invalid_x = check_value_in_range(&results.variable_values(0).unwrap(), &bounds);
        if !invalid_x.is_empty() {
            panic!("Some variables are outside the bounds: {:?}", invalid_x);
        }
    }

    #[test]
    /// Test the ZDT1 problem with 10 variables. Solution x1 in [0; 1] and x2 to x10 = 0.
    fn test_zdt1_problem() {
        let number_of_variables: usize = 10;
        let problem = ZDT1Problem::create(number_of_variables).unwrap();
        let args = NSLSArg {
            number_of_individuals: 40,
            stopping_condition: StoppingConditionType::MaxGeneration(MaxGeneration(300)),
            updater_options: None,
            dominance_policy: None,
            front_selector: None,
            population_granularity: None,
            seed: Some(1),
        };
        let mut algo = NSLS::new(problem, args).unwrap();
        algo.run().unwrap();
        let results = algo.get_results();

        let x_bounds = -0.1..0.1;
        for xi in 1..number_of_variables {
            let invalid = check_value_in_range(&results.variable_values(xi).unwrap(), &x_bounds);
            if invalid.len() > 2 {
                panic!(
                    "Found {} x{} solutions ({:?}) outside the bounds",
                    invalid.len(),
                    xi + 1,
                    invalid
                );
            }
        }

        // distance from the Pareto front f2 = 1 - sqrt(f1)
        let reference_front: Vec<Vec<f64>> = (0..=100)
            .map(|i| {
                let f1 = i as f64 / 100.0;
                vec![f1, 1.0 - f1.sqrt()]
            })
            .collect();
        let metric = Distance::new(&results.individuals, &reference_front).unwrap();
        assert!(metric.convergence().unwrap() < 0.05);
    }
}
