use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// The trait to implement a pure function of the decision variables. This is used to evaluate
/// an objective or a constraint of a problem. The trait is implemented for any closure with
/// signature `Fn(&[f64]) -> f64`, so stateful evaluators and plain closures can be mixed.
pub trait Evaluable: Send + Sync {
    /// Evaluate the function.
    ///
    /// # Arguments
    ///
    /// * `variables`: The values of the problem variables, in the order they are defined on the
    ///    problem.
    ///
    /// returns: `f64`
    fn evaluate(&self, variables: &[f64]) -> f64;
}

impl<F> Evaluable for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, variables: &[f64]) -> f64 {
        self(variables)
    }
}

/// Define a problem objective to minimise.
///
/// # Example
/// ```
///  use nsls::core::Objective;
///
///  let o = Objective::new("x^2", |x: &[f64]| x[0].powi(2));
///  assert_eq!(o.evaluate(&[3.0]), 9.0);
/// ```
#[derive(Clone)]
pub struct Objective {
    /// The objective name.
    name: String,
    /// The function used to calculate the objective value.
    evaluator: Arc<dyn Evaluable>,
}

impl Objective {
    /// Create a new objective.
    ///
    /// # Arguments
    ///
    /// * `name`: The objective name.
    /// * `evaluator`: The function to minimise.
    ///
    /// returns: `Objective`
    pub fn new(name: &str, evaluator: impl Evaluable + 'static) -> Self {
        Self {
            name: name.to_string(),
            evaluator: Arc::new(evaluator),
        }
    }

    /// Get the objective name.
    ///
    /// return: `String`
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Calculate the objective value for a solution.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    ///
    /// returns: `f64`
    pub fn evaluate(&self, variables: &[f64]) -> f64 {
        self.evaluator.evaluate(variables)
    }
}

impl Debug for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Objective")
            .field("name", &self.name)
            .finish()
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Objective '{}' is minimised", self.name)
    }
}

#[cfg(test)]
mod test {
    use crate::core::{Evaluable, Objective};

    /// A stateful evaluator.
    struct Shifted {
        offset: f64,
    }

    impl Evaluable for Shifted {
        fn evaluate(&self, variables: &[f64]) -> f64 {
            variables.iter().map(|x| (x - self.offset).powi(2)).sum()
        }
    }

    #[test]
    /// Closures and structs can both be used as objective functions.
    fn test_evaluators() {
        let closure = Objective::new("sum", |x: &[f64]| -> f64 { x.iter().sum() });
        assert_eq!(closure.evaluate(&[1.0, 2.0, 3.0]), 6.0);

        let shifted = Objective::new("shifted", Shifted { offset: 1.0 });
        assert_eq!(shifted.evaluate(&[1.0, 3.0]), 4.0);
        assert_eq!(shifted.name(), "shifted");
    }
}
