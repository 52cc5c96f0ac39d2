use std::fmt::{Display, Formatter};

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::{NslsError, Problem};

/// An individual in the population containing the problem solution, and the objective and
/// constraint values. Individuals are plain values: cloning one duplicates all of its data and no
/// individual refers to another one or to the problem it solves.
///
/// # Example
/// ```
/// use std::error::Error;
/// use nsls::core::{BoundedNumber, Individual, Objective, Problem};
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let objectives = vec![
///         Objective::new("x^2", |x: &[f64]| x[0].powi(2)),
///         Objective::new("(x-2)^2", |x: &[f64]| (x[0] - 2.0).powi(2)),
///     ];
///     let variables = vec![BoundedNumber::new("x", 0.0, 2.0)?];
///     let problem = Problem::new("SCH", objectives, variables, None)?;
///
///     // create an individual and evaluate its objectives
///     let a = Individual::evaluated(&problem, vec![0.5])?;
///     assert_eq!(a.objectives(), &[0.25, 2.25]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The value of the problem variables for the individual.
    variables: Vec<f64>,
    /// The values of the objectives.
    objectives: Vec<f64>,
    /// The raw values returned by the constraint functions.
    constraints: Vec<f64>,
    /// The index of the non-dominated front the individual was assigned to during selection.
    rank: usize,
    /// Scratch diversity score (crowding or farthest-candidate distance).
    distance: f64,
}

/// The serialised data of an individual.
#[derive(Serialize, Deserialize, Debug)]
pub struct IndividualExport {
    /// The value of the problem variables for the individual.
    pub variables: Vec<f64>,
    /// The values of the objectives.
    pub objectives: Vec<f64>,
    /// The value of the constraints.
    pub constraints: Vec<f64>,
    /// The overall amount of violation of the solution constraints.
    pub constraint_violation: f64,
    /// Whether the solution meets all the problem constraints.
    pub is_feasible: bool,
    /// The front index.
    pub rank: usize,
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Individual(variables={:?}, objectives={:?}, constraints={:?})",
            self.variables, self.objectives, self.constraints,
        )
    }
}

impl Individual {
    /// Create a new individual from known variable, objective and constraint values. Rank and
    /// distance are set to `0`.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    /// * `objectives`: The objective values.
    /// * `constraints`: The constraint values.
    ///
    /// returns: `Individual`
    pub fn new(variables: Vec<f64>, objectives: Vec<f64>, constraints: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraints,
            rank: 0,
            distance: 0.0,
        }
    }

    /// Create a new individual and evaluate its objectives and constraints. This returns an error
    /// if the variables do not match the problem variables or are outside their bounds.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `variables`: The variable values.
    ///
    /// returns: `Result<Individual, NslsError>`
    pub fn evaluated(problem: &Problem, variables: Vec<f64>) -> Result<Self, NslsError> {
        problem.check_variables(&variables)?;
        let mut individual = Self::new(variables, vec![], vec![]);
        individual.evaluate(problem)?;
        Ok(individual)
    }

    /// Create an individual whose variables are uniformly sampled within their bounds. The
    /// objectives and constraints are evaluated.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `rng`: The random number generator.
    ///
    /// returns: `Result<Individual, NslsError>`
    pub fn random(problem: &Problem, rng: &mut dyn RngCore) -> Result<Self, NslsError> {
        let variables = problem
            .variables()
            .iter()
            .map(|v| v.generate(rng))
            .collect();
        Self::evaluated(problem, variables)
    }

    /// Re-evaluate all the objectives and constraints using the current variables.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    ///
    /// returns: `Result<(), NslsError>`
    pub fn evaluate(&mut self, problem: &Problem) -> Result<(), NslsError> {
        self.objectives = problem.evaluate_objectives(&self.variables)?;
        self.constraints = problem.evaluate_constraints(&self.variables)?;
        Ok(())
    }

    /// Get the variable values.
    ///
    /// returns: `&[f64]`
    pub fn variables(&self) -> &[f64] {
        &self.variables
    }

    /// Get the objective values.
    ///
    /// returns: `&[f64]`
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Get the constraint values.
    ///
    /// returns: `&[f64]`
    pub fn constraints(&self) -> &[f64] {
        &self.constraints
    }

    /// Get the front index assigned by the last selection.
    ///
    /// returns: `usize`
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Get the diversity distance.
    ///
    /// returns: `f64`
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Set the front index.
    pub fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    /// Set the diversity distance.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    /// Overwrite one variable. The objectives are not re-evaluated.
    ///
    /// # Arguments
    ///
    /// * `index`: The variable index.
    /// * `value`: The new value.
    ///
    /// returns: `Result<(), NslsError>`
    pub fn update_variable(&mut self, index: usize, value: f64) -> Result<(), NslsError> {
        let x = self
            .variables
            .get_mut(index)
            .ok_or(NslsError::NonExistingIndex("variable".to_string(), index))?;
        *x = value;
        Ok(())
    }

    /// Calculate the overall amount of violation of the solution constraints. If the solution is
    /// feasible, then the violation is 0.0. Otherwise, a positive number is returned.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem defining the constraints.
    ///
    /// return: `f64`
    pub fn constraint_violation(&self, problem: &Problem) -> f64 {
        problem
            .constraints()
            .iter()
            .zip(&self.constraints)
            .map(|(c, value)| c.constraint_violation(*value))
            .sum()
    }

    /// Return whether the solution meets all the problem constraints.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem defining the constraints.
    ///
    /// return: `bool`
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        problem
            .constraints()
            .iter()
            .zip(&self.constraints)
            .all(|(c, value)| c.is_met(*value))
    }

    /// Calculate the Euclidean distance between the objective vectors of two individuals.
    ///
    /// # Arguments
    ///
    /// * `other`: The other individual.
    ///
    /// returns: `f64`
    pub fn objective_distance(&self, other: &Individual) -> f64 {
        self.objectives
            .iter()
            .zip(&other.objectives)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Export all the solution data.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    ///
    /// return: `IndividualExport`
    pub fn serialise(&self, problem: &Problem) -> IndividualExport {
        IndividualExport {
            variables: self.variables.clone(),
            objectives: self.objectives.clone(),
            constraints: self.constraints.clone(),
            constraint_violation: self.constraint_violation(problem),
            is_feasible: self.is_feasible(problem),
            rank: self.rank,
        }
    }
}

/// The population with the solutions.
#[derive(Clone, Default, Debug)]
pub struct Population(pub Vec<Individual>);

impl Population {
    /// Initialise a population with no individuals.
    ///
    /// returns: `Self`
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialise a population with some individuals.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The vector of individuals to add.
    ///
    /// returns: `Self`
    pub fn new_with(individuals: Vec<Individual>) -> Self {
        Self(individuals)
    }

    /// Generate a population of `number_of_individuals` random individuals. Each variable is
    /// sampled uniformly within its bounds, the objectives and constraints are evaluated and rank
    /// and distance are set to `0`.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    /// * `number_of_individuals`: The number of individuals to add to the population.
    /// * `rng`: The random number generator.
    ///
    /// returns: `Result<Population, NslsError>`
    pub fn init_random(
        problem: &Problem,
        number_of_individuals: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Self, NslsError> {
        let individuals = (0..number_of_individuals)
            .map(|_| Individual::random(problem, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(individuals))
    }

    /// Get the population size.
    ///
    /// return: `usize`
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the population is empty.
    ///
    /// return: `bool`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the population individuals.
    ///
    /// return: `&[Individual]`
    pub fn individuals(&self) -> &[Individual] {
        self.0.as_ref()
    }

    /// Get a population individual by its index.
    ///
    /// return: `Option<&Individual>`
    pub fn individual(&self, index: usize) -> Option<&Individual> {
        self.0.get(index)
    }

    /// Borrow the population individuals as mutable reference.
    ///
    /// return: `&mut [Individual]`
    pub fn individuals_as_mut(&mut self) -> &mut [Individual] {
        self.0.as_mut()
    }

    /// Add new individuals to the population.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The vector of individuals to add.
    ///
    /// returns: `()`
    pub fn add_new_individuals(&mut self, individuals: Vec<Individual>) {
        self.0.extend(individuals);
    }

    /// Serialise the individuals for export.
    ///
    /// return: `Vec<IndividualExport>`
    pub fn serialise(&self, problem: &Problem) -> Vec<IndividualExport> {
        self.0.iter().map(|i| i.serialise(problem)).collect()
    }
}

#[cfg(test)]
mod test {
    use crate::core::builtin_problems::CTP1Problem;
    use crate::core::utils::get_rng;
    use crate::core::{
        BoundedNumber, Constraint, Individual, Objective, Population, Problem, RelationalOperator,
    };

    #[test]
    /// The is_feasible and constraint violation
    fn test_feasibility() {
        let objectives = vec![Objective::new("obj1", |x: &[f64]| x[0])];
        let variables = vec![BoundedNumber::new("X1", 0.0, 2.0).unwrap()];
        let constraints = vec![
            Constraint::new("c1", RelationalOperator::EqualTo, 1.0, |x: &[f64]| x[0]),
            Constraint::new("c2", RelationalOperator::EqualTo, 599.0, |x: &[f64]| {
                x[0] + 598.0
            }),
        ];
        let problem = Problem::new("P", objectives, variables, Some(constraints)).unwrap();

        // Feasible solution
        let solution = Individual::evaluated(&problem, vec![1.0]).unwrap();
        assert!(solution.is_feasible(&problem));
        assert_eq!(solution.constraint_violation(&problem), 0.0);

        // Unfeasible solution: both constraints are off by 1
        let solution = Individual::evaluated(&problem, vec![2.0]).unwrap();
        assert!(!solution.is_feasible(&problem));
        assert_eq!(solution.constraint_violation(&problem), 2.0);
    }

    #[test]
    /// Out of bound variables are rejected.
    fn test_out_of_bounds() {
        let problem = CTP1Problem::create(4).unwrap();
        assert!(Individual::evaluated(&problem, vec![0.0, 0.0, 2.0, 0.0]).is_err());
        assert!(Individual::evaluated(&problem, vec![0.0, 0.0]).is_err());
    }

    #[test]
    /// A random population has evaluated individuals within the bounds with rank and distance
    /// reset.
    fn test_init_random() {
        let problem = CTP1Problem::create(5).unwrap();
        let mut rng = get_rng(Some(3));
        let population = Population::init_random(&problem, 12, rng.as_mut()).unwrap();

        assert_eq!(population.len(), 12);
        for individual in population.individuals() {
            assert!(problem.check_variables(individual.variables()).is_ok());
            assert_eq!(individual.objectives().len(), 2);
            assert_eq!(individual.constraints().len(), 2);
            assert_eq!(individual.rank(), 0);
            assert_eq!(individual.distance(), 0.0);
            assert_eq!(
                individual.objectives(),
                problem
                    .evaluate_objectives(individual.variables())
                    .unwrap()
                    .as_slice()
            );
        }
    }

    #[test]
    fn test_objective_distance() {
        let a = Individual::new(vec![], vec![0.0, 0.0], vec![]);
        let b = Individual::new(vec![], vec![3.0, 4.0], vec![]);
        assert_eq!(a.objective_distance(&b), 5.0);
    }
}
