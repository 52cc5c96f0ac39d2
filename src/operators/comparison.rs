use serde::{Deserialize, Serialize};

use crate::core::{Individual, NslsError, Problem};

/// The preferred solution with the `BinaryComparisonOperator`.
#[derive(Debug, Clone, Copy, PartialOrd, PartialEq)]
pub enum PreferredSolution {
    /// The first solution is preferred.
    First,
    /// The second solution is preferred.
    Second,
    /// The two solutions are mutually preferred.
    MutuallyPreferred,
}

impl PreferredSolution {
    /// The relation as a sign: `1` when the first solution is preferred, `-1` when the second
    /// one is and `0` otherwise.
    ///
    /// returns: `i8`
    pub fn as_sign(&self) -> i8 {
        match self {
            PreferredSolution::First => 1,
            PreferredSolution::Second => -1,
            PreferredSolution::MutuallyPreferred => 0,
        }
    }

    /// Swap the role of the two solutions.
    ///
    /// returns: `PreferredSolution`
    pub fn reverse(&self) -> Self {
        match self {
            PreferredSolution::First => PreferredSolution::Second,
            PreferredSolution::Second => PreferredSolution::First,
            PreferredSolution::MutuallyPreferred => PreferredSolution::MutuallyPreferred,
        }
    }
}

/// A trait to implement a comparison operator between two solutions.
pub trait BinaryComparisonOperator {
    /// Compare two solution and select the best one.
    ///
    /// # Arguments
    ///
    /// * `first_solution`: The first solution to compare.
    /// * `second_solution`: The second solution to compare.
    ///
    /// returns: `Result<PreferredSolution, NslsError>` The preferred solution.
    fn compare(
        &self,
        first_solution: &Individual,
        second_solution: &Individual,
    ) -> Result<PreferredSolution, NslsError>;
}

/// Assess the Pareto dominance between two objective vectors under minimisation. The first
/// vector dominates when all its objectives are smaller or equal and at least one is strictly
/// smaller. Equal vectors are mutually preferred. This returns an error if the two vectors have a
/// different length.
///
/// # Arguments
///
/// * `first`: The objectives of the first solution.
/// * `second`: The objectives of the second solution.
///
/// returns: `Result<PreferredSolution, NslsError>`
pub fn pareto_dominance(first: &[f64], second: &[f64]) -> Result<PreferredSolution, NslsError> {
    if first.len() != second.len() {
        return Err(NslsError::ComparisonOperator(
            "ParetoDominance".to_string(),
            format!(
                "The objective vectors have different lengths ({} and {})",
                first.len(),
                second.len()
            ),
        ));
    }

    let mut relation = PreferredSolution::MutuallyPreferred;
    for (obj_sol1, obj_sol2) in first.iter().zip(second) {
        if obj_sol1 < obj_sol2 {
            if relation == PreferredSolution::Second {
                return Ok(PreferredSolution::MutuallyPreferred);
            }
            relation = PreferredSolution::First;
        } else if obj_sol1 > obj_sol2 {
            if relation == PreferredSolution::First {
                return Ok(PreferredSolution::MutuallyPreferred);
            }
            relation = PreferredSolution::Second;
        }
    }
    Ok(relation)
}

/// The Pareto dominance between two solutions using their objectives only. Constraint values
/// are ignored.
pub struct ParetoDominance;

impl BinaryComparisonOperator for ParetoDominance {
    fn compare(
        &self,
        first_solution: &Individual,
        second_solution: &Individual,
    ) -> Result<PreferredSolution, NslsError> {
        pareto_dominance(first_solution.objectives(), second_solution.objectives())
    }
}

/// This assesses the Pareto dominance between two solutions $S_1$ and $S_2$ and their constraint
/// violations in constrained multi-objective optimization problems. A solution $S_1$ is
/// constraint-dominated if:
/// 1) $S_1$ is feasible but $S_2$ is not.
/// 2) Both $S_1$ and $S_2$ are infeasible and $CV(S_1) < CV(S_2)$ (where $CV$ is the constraint
///    violation function); or
/// 3) both have the same violation and $S_1$ Pareto-dominate $S_2$ ($ S_1 \prec S_2 $).
///
/// See:
///  - Kalyanmoy Deb & Samir Agrawal. (2002). <https://doi.org/10.1007/978-3-7091-6384-9_40>.
///  - Shuang Li, Ke Li, Wei Li. (2022). <https://doi.org/10.48550/arXiv.2205.14349>.
pub struct ParetoConstrainedDominance<'a> {
    /// The problem defining the constraints.
    problem: &'a Problem,
}

impl<'a> ParetoConstrainedDominance<'a> {
    /// Create the operator.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem defining the constraints.
    ///
    /// returns: `ParetoConstrainedDominance`
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }
}

impl BinaryComparisonOperator for ParetoConstrainedDominance<'_> {
    fn compare(
        &self,
        first_solution: &Individual,
        second_solution: &Individual,
    ) -> Result<PreferredSolution, NslsError> {
        let cv1 = first_solution.constraint_violation(self.problem);
        let cv2 = second_solution.constraint_violation(self.problem);

        // at least one solution is not feasible (step 1-2)
        if self.problem.number_of_constraints() > 0 && cv1 != cv2 {
            if first_solution.is_feasible(self.problem) {
                return Ok(PreferredSolution::First);
            } else if second_solution.is_feasible(self.problem) {
                return Ok(PreferredSolution::Second);
            } else if cv1 < cv2 {
                return Ok(PreferredSolution::First);
            } else if cv1 > cv2 {
                return Ok(PreferredSolution::Second);
            }
        }

        // check pareto dominance using all the objectives (step 3)
        pareto_dominance(first_solution.objectives(), second_solution.objectives())
    }
}

/// How two solutions are compared during sorting and local search.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum DominancePolicy {
    /// Compare the objectives only. Constraint values are stored on the individuals but never
    /// consulted.
    #[default]
    ObjectivesOnly,
    /// Compare the constraint violation first and fall back to the objectives when the
    /// violations are equal. See [`ParetoConstrainedDominance`].
    ConstraintsFirst,
}

impl DominancePolicy {
    /// Get the comparison operator implementing the policy.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved.
    ///
    /// returns: `Box<dyn BinaryComparisonOperator + 'a>`
    pub fn operator<'a>(&self, problem: &'a Problem) -> Box<dyn BinaryComparisonOperator + 'a> {
        match self {
            DominancePolicy::ObjectivesOnly => Box::new(ParetoDominance),
            DominancePolicy::ConstraintsFirst => Box::new(ParetoConstrainedDominance::new(problem)),
        }
    }
}
