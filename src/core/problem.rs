use std::collections::HashSet;
use std::fmt::{Debug, Display, Formatter};

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{BoundedNumber, Constraint, NslsError, Objective};

#[derive(Serialize, Deserialize, Debug)]
/// Serialised data of a problem.
pub struct ProblemExport {
    /// The problem name.
    pub name: String,
    /// The problem variables.
    pub variables: Vec<BoundedNumber>,
    /// The objective names.
    pub objective_names: Vec<String>,
    /// The constraints as `name operator target` strings.
    pub constraints: Vec<String>,
    /// The number of objectives
    pub number_of_objectives: usize,
    /// The number of constraints
    pub number_of_constraints: usize,
    /// The number of variables
    pub number_of_variables: usize,
}

/// Define a new problem to optimise as:
///
///  $$$ Min(f_1(x), f_2(x), ..., f_M(x)) $
///
/// where
///   - the integer $M \geq 1$ is the number of objectives;
///   - $x$ the $D$-variable solution vector bounded to $$$ x_i^{(L)} \leq x_i \leq x_i^{(U)}$ with
///     $i=1,2,...,D$.
///
/// The problem may also be subjected to constraints, each defined as a function of $x$ compared
/// against a target with a [`crate::core::RelationalOperator`].
///
/// # Example
/// ```
///  use nsls::core::{BoundedNumber, Objective, Problem};
///
///  // Define a two-objective one-variable problem
///  let objectives = vec![
///     Objective::new("x^2", |x: &[f64]| x[0].powi(2)),
///     Objective::new("(x-2)^2", |x: &[f64]| (x[0] - 2.0).powi(2)),
///  ];
///  let variables = vec![BoundedNumber::new("x", -10.0, 10.0).unwrap()];
///
///  let problem = Problem::new("SCH", objectives, variables, None).unwrap();
///  assert_eq!(problem.evaluate_objectives(&[1.0]).unwrap(), vec![1.0, 1.0]);
///  println!("{}", problem);
/// ```
#[derive(Debug)]
pub struct Problem {
    /// The problem name.
    name: String,
    /// The problem objectives.
    objectives: Vec<Objective>,
    /// The problem constraints.
    constraints: Vec<Constraint>,
    /// The problem variables.
    variables: Vec<BoundedNumber>,
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem '{}' with {} variables, {} objectives and {} constraints",
            self.name,
            self.number_of_variables(),
            self.number_of_objectives(),
            self.number_of_constraints(),
        )
    }
}

impl Problem {
    /// Initialise the problem. This returns an error if no objective or variable is given, or
    /// if two objectives, variables or constraints share the same name.
    ///
    /// # Arguments
    ///
    /// * `name`: The problem name.
    /// * `objectives`: The vector of objective to set on the problem.
    /// * `variables`: The vector of bounded variables to set on the problem.
    /// * `constraints`: The optional vector of constraints.
    ///
    /// returns: `Result<Problem, NslsError>`
    pub fn new(
        name: &str,
        objectives: Vec<Objective>,
        variables: Vec<BoundedNumber>,
        constraints: Option<Vec<Constraint>>,
    ) -> Result<Self, NslsError> {
        if objectives.is_empty() {
            return Err(NslsError::NoObjective);
        }
        if variables.is_empty() {
            return Err(NslsError::NoVariables);
        }
        let constraints = constraints.unwrap_or_default();

        Self::check_unique_names("objective", objectives.iter().map(|o| o.name()))?;
        Self::check_unique_names("variable", variables.iter().map(|v| v.name()))?;
        Self::check_unique_names("constraint", constraints.iter().map(|c| c.name()))?;

        let problem = Self {
            name: name.to_string(),
            objectives,
            constraints,
            variables,
        };
        info!("Created {problem}");
        Ok(problem)
    }

    /// Return an error on the first repeated name.
    fn check_unique_names(
        item_type: &str,
        names: impl Iterator<Item = String>,
    ) -> Result<(), NslsError> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.clone()) {
                return Err(NslsError::DuplicatedName(item_type.to_string(), name));
            }
        }
        Ok(())
    }

    /// Get the problem name.
    ///
    /// returns: `String`
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Get the total number of objectives of the problem.
    ///
    /// returns: `usize`
    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Get the total number of constraints of the problem.
    ///
    /// returns: `usize`
    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get the total number of variables of the problem.
    ///
    /// returns: `usize`
    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the name of the variables set on the problem.
    ///
    /// return `Vec<String>`
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|o| o.name()).collect()
    }

    /// Get the name of the objectives set on the problem.
    ///
    /// return `Vec<String>`
    pub fn objective_names(&self) -> Vec<String> {
        self.objectives.iter().map(|o| o.name()).collect()
    }

    /// Get the name of the constraints set on the problem.
    ///
    /// return `Vec<String>`
    pub fn constraint_names(&self) -> Vec<String> {
        self.constraints.iter().map(|o| o.name()).collect()
    }

    /// Get the problem variables.
    ///
    /// return `&[BoundedNumber]`
    pub fn variables(&self) -> &[BoundedNumber] {
        &self.variables
    }

    /// Get the problem objectives.
    ///
    /// return `&[Objective]`
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Get the problem constraints.
    ///
    /// return `&[Constraint]`
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check that a solution has one value per problem variable and that every value lies
    /// within its variable bounds.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    ///
    /// returns: `Result<(), NslsError>`
    pub fn check_variables(&self, variables: &[f64]) -> Result<(), NslsError> {
        self.check_length(variables)?;
        for (var, value) in self.variables.iter().zip(variables) {
            if !var.contains(*value) {
                return Err(NslsError::OutOfBounds(
                    var.name(),
                    *value,
                    var.min_value(),
                    var.max_value(),
                ));
            }
        }
        Ok(())
    }

    /// Evaluate all the objectives for a solution. This returns an error if the number of
    /// variables does not match the problem, or if an objective function returns NaN.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    ///
    /// returns: `Result<Vec<f64>, NslsError>`
    pub fn evaluate_objectives(&self, variables: &[f64]) -> Result<Vec<f64>, NslsError> {
        self.check_length(variables)?;
        self.objectives
            .iter()
            .map(|o| {
                let value = o.evaluate(variables);
                if value.is_nan() {
                    Err(NslsError::NaN("objective".to_string(), o.name()))
                } else {
                    Ok(value)
                }
            })
            .collect()
    }

    /// Evaluate all the raw constraint values for a solution. This returns an error if the
    /// number of variables does not match the problem, or if a constraint function returns NaN.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    ///
    /// returns: `Result<Vec<f64>, NslsError>`
    pub fn evaluate_constraints(&self, variables: &[f64]) -> Result<Vec<f64>, NslsError> {
        self.check_length(variables)?;
        self.constraints
            .iter()
            .map(|c| {
                let value = c.evaluate(variables);
                if value.is_nan() {
                    Err(NslsError::NaN("constraint".to_string(), c.name()))
                } else {
                    Ok(value)
                }
            })
            .collect()
    }

    fn check_length(&self, variables: &[f64]) -> Result<(), NslsError> {
        if variables.len() != self.number_of_variables() {
            return Err(NslsError::WrongLength(
                "variables".to_string(),
                variables.len(),
                self.number_of_variables(),
            ));
        }
        Ok(())
    }

    /// Serialise the problem data.
    ///
    /// return: `ProblemExport`
    pub fn serialise(&self) -> ProblemExport {
        ProblemExport {
            name: self.name.clone(),
            variables: self.variables.clone(),
            objective_names: self.objective_names(),
            constraints: self.constraints.iter().map(|c| c.to_string()).collect(),
            number_of_objectives: self.number_of_objectives(),
            number_of_constraints: self.number_of_constraints(),
            number_of_variables: self.number_of_variables(),
        }
    }
}

/// Benchmark problems used to test multi-objective algorithms.
pub mod builtin_problems {
    use std::f64::consts::PI;

    use crate::core::{
        BoundedNumber, Constraint, NslsError, Objective, Problem, RelationalOperator,
    };

    /// Create `number_of_variables` variables named `x1`, `x2`, ... bounded to `[min, max]`.
    fn real_variables(
        number_of_variables: usize,
        min_value: f64,
        max_value: f64,
    ) -> Result<Vec<BoundedNumber>, NslsError> {
        (1..=number_of_variables)
            .map(|i| BoundedNumber::new(format!("x{i}").as_str(), min_value, max_value))
            .collect()
    }

    /// The `g` function used by ZDT1, ZDT2 and ZDT3.
    fn zdt_g(x: &[f64]) -> f64 {
        let n = x.len() as f64;
        1.0 + 9.0 * x[1..].iter().sum::<f64>() / (n - 1.0)
    }

    /// Return an error if fewer than `min_size` variables are requested.
    fn check_size(name: &str, number_of_variables: usize, min_size: usize) -> Result<(), NslsError> {
        if number_of_variables < min_size {
            return Err(NslsError::Generic(format!(
                "The {name} problem needs at least {min_size} variables"
            )));
        }
        Ok(())
    }

    /// The Schaffer’s study (SCH) problem.
    #[derive(Debug)]
    pub struct SCHProblem;

    impl SCHProblem {
        /// Create the problem for the optimisation.
        pub fn create() -> Result<Problem, NslsError> {
            let objectives = vec![
                Objective::new("x^2", |x: &[f64]| SCHProblem::f1(x[0])),
                Objective::new("(x-2)^2", |x: &[f64]| SCHProblem::f2(x[0])),
            ];
            let variables = vec![BoundedNumber::new("x", -1000.0, 1000.0)?];
            Problem::new("SCH", objectives, variables, None)
        }

        /// The first objective function
        pub fn f1(x: f64) -> f64 {
            x.powi(2)
        }

        /// The second objective function
        pub fn f2(x: f64) -> f64 {
            (x - 2.0).powi(2)
        }
    }

    /// The Fonseca and Fleming’s study (FON) problem.
    #[derive(Debug)]
    pub struct FonProblem;

    impl FonProblem {
        /// Create the problem for the optimisation.
        pub fn create() -> Result<Problem, NslsError> {
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| {
                    let arg: f64 = x.iter().map(|v| (v - 1.0 / 3.0_f64.sqrt()).powi(2)).sum();
                    1.0 - f64::exp(-arg)
                }),
                Objective::new("f2", |x: &[f64]| {
                    let arg: f64 = x.iter().map(|v| (v + 1.0 / 3.0_f64.sqrt()).powi(2)).sum();
                    1.0 - f64::exp(-arg)
                }),
            ];
            Problem::new("FON", objectives, real_variables(3, -4.0, 4.0)?, None)
        }
    }

    /// The Kursawe (KUR) problem with 3 variables.
    #[derive(Debug)]
    pub struct KurProblem;

    impl KurProblem {
        /// Create the problem for the optimisation.
        pub fn create() -> Result<Problem, NslsError> {
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| {
                    x.windows(2)
                        .map(|w| -10.0 * f64::exp(-0.2 * (w[0].powi(2) + w[1].powi(2)).sqrt()))
                        .sum::<f64>()
                }),
                Objective::new("f2", |x: &[f64]| {
                    x.iter()
                        .map(|v| v.abs().powf(0.8) + 5.0 * v.powi(3).sin())
                        .sum::<f64>()
                }),
            ];
            Problem::new("KUR", objectives, real_variables(3, -5.0, 5.0)?, None)
        }
    }

    /// The ZDT1 problem from Deb et al. (2002). The optimal solution is $x_1 \in [0; 1]$ and
    /// $x_i = 0$ for the other variables.
    #[derive(Debug)]
    pub struct ZDT1Problem;

    impl ZDT1Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 30).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("ZDT1", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0]),
                Objective::new("f2", |x: &[f64]| {
                    let g = zdt_g(x);
                    g * (1.0 - (x[0] / g).sqrt())
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("ZDT1", objectives, variables, None)
        }
    }

    /// The ZDT2 problem from Deb et al. (2002) with a non-convex front.
    #[derive(Debug)]
    pub struct ZDT2Problem;

    impl ZDT2Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 30).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("ZDT2", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0]),
                Objective::new("f2", |x: &[f64]| {
                    let g = zdt_g(x);
                    g * (1.0 - (x[0] / g).powi(2))
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("ZDT2", objectives, variables, None)
        }
    }

    /// The ZDT3 problem from Deb et al. (2002) with a disconnected front.
    #[derive(Debug)]
    pub struct ZDT3Problem;

    impl ZDT3Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 30).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("ZDT3", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0]),
                Objective::new("f2", |x: &[f64]| {
                    let g = zdt_g(x);
                    let ratio = x[0] / g;
                    g * (1.0 - ratio.sqrt() - ratio * (10.0 * PI * x[0]).sin())
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("ZDT3", objectives, variables, None)
        }
    }

    /// The ZDT4 problem from Deb et al. (2002) with many local fronts. The first variable is
    /// bounded to [0; 1], the others to [-5; 5].
    #[derive(Debug)]
    pub struct ZDT4Problem;

    impl ZDT4Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 10).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("ZDT4", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0]),
                Objective::new("f2", |x: &[f64]| {
                    let n = x.len() as f64;
                    let g = 1.0
                        + 10.0 * (n - 1.0)
                        + x[1..]
                            .iter()
                            .map(|v| v.powi(2) - 10.0 * (4.0 * PI * v).cos())
                            .sum::<f64>();
                    g * (1.0 - (x[0] / g).sqrt())
                }),
            ];
            let mut variables = vec![BoundedNumber::new("x1", 0.0, 1.0)?];
            for i in 2..=number_of_variables {
                variables.push(BoundedNumber::new(format!("x{i}").as_str(), -5.0, 5.0)?);
            }
            Problem::new("ZDT4", objectives, variables, None)
        }
    }

    /// The ZDT6 problem from Deb et al. (2002) with a non-uniform front.
    #[derive(Debug)]
    pub struct ZDT6Problem;

    impl ZDT6Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 10).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("ZDT6", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", ZDT6Problem::f1),
                Objective::new("f2", |x: &[f64]| {
                    let n = x.len() as f64;
                    let g = 1.0 + 9.0 * (x[1..].iter().sum::<f64>() / (n - 1.0)).powf(0.25);
                    g * (1.0 - (ZDT6Problem::f1(x) / g).powi(2))
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("ZDT6", objectives, variables, None)
        }

        /// The first objective function
        pub fn f1(x: &[f64]) -> f64 {
            1.0 - f64::exp(-4.0 * x[0]) * (6.0 * PI * x[0]).sin().powi(6)
        }
    }

    /// The LZ1 problem from Li & Zhang (2009). The Pareto set is $x_j = x_1^{0.5(1 + 3(j-2)/(n-2))}$
    /// with the Pareto front $f_2 = 1 - \sqrt{f_1}$, $f_1 \in [0; 1]$.
    #[derive(Debug)]
    pub struct LZ1Problem;

    impl LZ1Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 3, usually 30).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("LZ1", number_of_variables, 3)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0] + LZ1Problem::penalty(x, 3)),
                Objective::new("f2", |x: &[f64]| {
                    1.0 - x[0].sqrt() + LZ1Problem::penalty(x, 2)
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("LZ1", objectives, variables, None)
        }

        /// The distance of the variables $x_j$ (with $j$ = `first_j`, `first_j` + 2, ...) from the
        /// Pareto set, scaled by `2 / |J|`. Indexes are 1-based as in the paper.
        fn penalty(x: &[f64], first_j: usize) -> f64 {
            let n = x.len();
            let mut sum = 0.0;
            let mut count = 0;
            for j in (first_j..=n).step_by(2) {
                let exponent = 0.5 * (1.0 + 3.0 * (j as f64 - 2.0) / (n as f64 - 2.0));
                sum += (x[j - 1] - x[0].powf(exponent)).powi(2);
                count += 1;
            }
            2.0 / count as f64 * sum
        }
    }

    /// The constrained CTP1 problem from Deb et al. (2001) with two constraints that must be
    /// smaller or equal to zero.
    #[derive(Debug)]
    pub struct CTP1Problem;

    impl CTP1Problem {
        /// Create the problem for the optimisation.
        ///
        /// # Arguments
        ///
        /// * `number_of_variables`: The number of variables (at least 2, usually 10).
        pub fn create(number_of_variables: usize) -> Result<Problem, NslsError> {
            check_size("CTP1", number_of_variables, 2)?;
            let objectives = vec![
                Objective::new("f1", |x: &[f64]| x[0]),
                Objective::new("f2", CTP1Problem::f2),
            ];
            let constraints = vec![
                Constraint::new("c1", RelationalOperator::LessOrEqualTo, 0.0, |x: &[f64]| {
                    0.858 * f64::exp(-0.541 * x[0]) - CTP1Problem::f2(x)
                }),
                Constraint::new("c2", RelationalOperator::LessOrEqualTo, 0.0, |x: &[f64]| {
                    0.728 * f64::exp(-0.295 * x[0]) - CTP1Problem::f2(x)
                }),
            ];
            let variables = real_variables(number_of_variables, 0.0, 1.0)?;
            Problem::new("CTP1", objectives, variables, Some(constraints))
        }

        /// The second objective function
        pub fn f2(x: &[f64]) -> f64 {
            let g = zdt_g(x);
            g * f64::exp(-x[0] / g)
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::builtin_problems::{
        CTP1Problem, KurProblem, LZ1Problem, SCHProblem, ZDT1Problem, ZDT4Problem, ZDT6Problem,
    };
    use crate::core::{BoundedNumber, NslsError, Objective, Problem};

    #[test]
    /// Problems without objectives or variables, or with duplicated names, are rejected.
    fn test_invalid_problem() {
        let variables = vec![BoundedNumber::new("x", 0.0, 1.0).unwrap()];
        assert!(matches!(
            Problem::new("P", vec![], variables.clone(), None),
            Err(NslsError::NoObjective)
        ));

        let objectives = vec![Objective::new("f1", |x: &[f64]| x[0])];
        assert!(matches!(
            Problem::new("P", objectives, vec![], None),
            Err(NslsError::NoVariables)
        ));

        let objectives = vec![
            Objective::new("f1", |x: &[f64]| x[0]),
            Objective::new("f1", |x: &[f64]| -x[0]),
        ];
        assert!(matches!(
            Problem::new("P", objectives, variables, None),
            Err(NslsError::DuplicatedName(_, _))
        ));
    }

    #[test]
    /// Objective values are returned in order and bad inputs raise errors.
    fn test_evaluate() {
        let problem = SCHProblem::create().unwrap();
        assert_eq!(problem.evaluate_objectives(&[3.0]).unwrap(), vec![9.0, 1.0]);
        assert!(problem.evaluate_objectives(&[3.0, 1.0]).is_err());
        assert!(problem.check_variables(&[2000.0]).is_err());
        assert!(problem.check_variables(&[20.0]).is_ok());

        let objectives = vec![Objective::new("nan", |_: &[f64]| f64::NAN)];
        let variables = vec![BoundedNumber::new("x", 0.0, 1.0).unwrap()];
        let problem = Problem::new("P", objectives, variables, None).unwrap();
        assert!(matches!(
            problem.evaluate_objectives(&[0.5]),
            Err(NslsError::NaN(_, _))
        ));
    }

    #[test]
    /// Points on the Pareto set of the benchmark problems return the expected objectives.
    fn test_builtin_problems_pareto_set() {
        // ZDT1: x2..xn = 0 gives f2 = 1 - sqrt(f1)
        let problem = ZDT1Problem::create(30).unwrap();
        let mut x = vec![0.0; 30];
        x[0] = 0.25;
        let obj = problem.evaluate_objectives(&x).unwrap();
        assert_approx_eq!(f64, obj[0], 0.25, epsilon = 0.0001);
        assert_approx_eq!(f64, obj[1], 0.5, epsilon = 0.0001);

        // ZDT4: g = 1 at the optimum
        let problem = ZDT4Problem::create(10).unwrap();
        let mut x = vec![0.0; 10];
        x[0] = 0.36;
        let obj = problem.evaluate_objectives(&x).unwrap();
        assert_approx_eq!(f64, obj[1], 0.4, epsilon = 0.0001);
        assert_eq!(problem.variables()[1].bounds(), (-5.0, 5.0));

        // ZDT6: f1 = 1 at x1 = 0
        let problem = ZDT6Problem::create(10).unwrap();
        let obj = problem.evaluate_objectives(&[0.0; 10]).unwrap();
        assert_approx_eq!(f64, obj[0], 1.0, epsilon = 0.0001);
        assert_approx_eq!(f64, obj[1], 0.0, epsilon = 0.0001);

        // LZ1: x_j = x1^(0.5(1 + 3(j-2)/(n-2)))
        let n = 30;
        let problem = LZ1Problem::create(n).unwrap();
        let x1: f64 = 0.49;
        let x: Vec<f64> = (1..=n)
            .map(|j| {
                if j == 1 {
                    x1
                } else {
                    x1.powf(0.5 * (1.0 + 3.0 * (j as f64 - 2.0) / (n as f64 - 2.0)))
                }
            })
            .collect();
        let obj = problem.evaluate_objectives(&x).unwrap();
        assert_approx_eq!(f64, obj[0], 0.49, epsilon = 0.0001);
        assert_approx_eq!(f64, obj[1], 0.3, epsilon = 0.0001);

        // KUR at the origin
        let problem = KurProblem::create().unwrap();
        let obj = problem.evaluate_objectives(&[0.0; 3]).unwrap();
        assert_approx_eq!(f64, obj[0], -20.0, epsilon = 0.0001);
        assert_approx_eq!(f64, obj[1], 0.0, epsilon = 0.0001);
    }

    #[test]
    /// The CTP1 constraints are met only above the constrained front.
    fn test_ctp1_constraints() {
        let problem = CTP1Problem::create(10).unwrap();
        assert_eq!(problem.number_of_constraints(), 2);

        // g = 1 and f2 = exp(-x1) which is above both constraint curves at x1 = 0
        let values = problem.evaluate_constraints(&[0.0; 10]).unwrap();
        let constraints = problem.constraints();
        assert!(constraints[0].is_met(values[0]));
        assert!(constraints[1].is_met(values[1]));

        // f2 = exp(-1) = 0.368 is below 0.858 * exp(-0.541) = 0.4995
        let mut x = vec![0.0; 10];
        x[0] = 1.0;
        let values = problem.evaluate_constraints(&x).unwrap();
        assert!(!constraints[0].is_met(values[0]));
    }
}
