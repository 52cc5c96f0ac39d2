use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::Evaluable;

/// Operator used to check a bounded constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RelationalOperator {
    /// Value must equal the constraint value
    EqualTo,
    /// Value must not equal the constraint value
    NotEqualTo,
    /// Value must be less or equal to the constraint value
    LessOrEqualTo,
    /// Value must be less than the constraint value
    LessThan,
    /// Value must be greater or equal to the constraint value
    GreaterOrEqualTo,
    /// Value must be greater than the constraint value
    GreaterThan,
}

impl RelationalOperator {
    /// The mathematical sign of the operator.
    ///
    /// returns: `&str`
    pub fn sign(&self) -> &str {
        match self {
            RelationalOperator::EqualTo => "==",
            RelationalOperator::NotEqualTo => "!=",
            RelationalOperator::LessOrEqualTo => "<=",
            RelationalOperator::LessThan => "<",
            RelationalOperator::GreaterOrEqualTo => ">=",
            RelationalOperator::GreaterThan => ">",
        }
    }
}

/// Define a constraint where the value returned by a function of the decision variables is
/// compared against a target with a relational operator:
///  - Equality operator ([`RelationalOperator::EqualTo`]): value == target
///  - Inequality operator ([`RelationalOperator::NotEqualTo`]): value != target
///  - Greater than operator ([`RelationalOperator::GreaterThan`]): value > target
///  - Greater or equal to operator ([`RelationalOperator::GreaterOrEqualTo`]): value >= target
///  - less than operator ([`RelationalOperator::LessThan`]): value < target
///  - less or equal to operator ([`RelationalOperator::LessOrEqualTo`]): value <= target
///
/// # Example
///
/// ```
///   use nsls::core::{Constraint, RelationalOperator};
///   let c = Constraint::new("x0+x1>=5.2", RelationalOperator::GreaterOrEqualTo, 5.2, |x: &[f64]| x[0] + x[1]);
///   assert_eq!(c.is_met(c.evaluate(&[5.0, 5.1])), true);
///   assert_eq!(c.is_met(3.11), false);
/// ```
#[derive(Clone)]
pub struct Constraint {
    /// The constraint name.
    name: String,
    /// The relational operator to use to compare a value against the constraint target value.
    operator: RelationalOperator,
    /// The constraint target.
    target: f64,
    /// The function of the decision variables whose value is checked against the target.
    evaluator: Arc<dyn Evaluable>,
}

impl Constraint {
    /// Create a new relational constraint.
    ///
    /// # Arguments
    ///
    /// * `name`: The constraint name.
    /// * `operator`: The relational operator to use to compare a value against the constraint
    ///    target value.
    /// * `target`: The constraint target.
    /// * `evaluator`: The function calculating the constraint value from the variables.
    ///
    /// returns: `Constraint`
    pub fn new(
        name: &str,
        operator: RelationalOperator,
        target: f64,
        evaluator: impl Evaluable + 'static,
    ) -> Self {
        Self {
            name: name.to_owned(),
            operator,
            target,
            evaluator: Arc::new(evaluator),
        }
    }

    /// Get the constraint name.
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Calculate the raw constraint value for a solution.
    ///
    /// # Arguments
    ///
    /// * `variables`: The variable values.
    ///
    /// returns: `f64`
    pub fn evaluate(&self, variables: &[f64]) -> f64 {
        self.evaluator.evaluate(variables)
    }

    /// Check whether the constraint is met.
    ///
    /// # Arguments
    ///
    /// * `value`: The value to check against the constraint target.
    ///
    /// returns: `bool`
    pub fn is_met(&self, value: f64) -> bool {
        match self.operator {
            RelationalOperator::EqualTo => value == self.target,
            RelationalOperator::NotEqualTo => value != self.target,
            RelationalOperator::LessOrEqualTo => value <= self.target,
            RelationalOperator::LessThan => value < self.target,
            RelationalOperator::GreaterOrEqualTo => value >= self.target,
            RelationalOperator::GreaterThan => value > self.target,
        }
    }

    /// Calculate the amount of violation of the constraint for a solution value. If the
    /// constraint is met, then the violation is 0.0. Otherwise, the absolute difference between
    /// `target` and `value` is returned.
    ///
    /// See:
    ///  - Kalyanmoy Deb & Samir Agrawal. (2002). <https://doi.org/10.1007/978-3-7091-6384-9_40>.
    ///
    /// # Arguments
    ///
    /// * `value`: The value to check against the constraint target.
    ///
    /// return: `f64`
    pub fn constraint_violation(&self, value: f64) -> f64 {
        if self.is_met(value) {
            return 0.0;
        }
        match self.operator {
            RelationalOperator::NotEqualTo => 1.0,
            RelationalOperator::EqualTo
            | RelationalOperator::LessOrEqualTo
            | RelationalOperator::GreaterOrEqualTo => f64::abs(self.target - value),
            // strict operators are still violated when value equals the target
            RelationalOperator::LessThan | RelationalOperator::GreaterThan => {
                f64::abs(self.target - value) + 0.0001
            }
        }
    }

    /// Get the set constraint target.
    ///
    /// returns: `f64`.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Get the set constraint operator.
    ///
    /// returns: `RelationalOperator`.
    pub fn operator(&self) -> RelationalOperator {
        self.operator.clone()
    }
}

impl Debug for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("operator", &self.operator)
            .field("target", &self.target)
            .finish()
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.operator.sign(), self.target)
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::{Constraint, RelationalOperator};

    fn constraint(operator: RelationalOperator) -> Constraint {
        Constraint::new("test", operator, 5.2, |x: &[f64]| x[0])
    }

    #[test]
    fn test_is_met() {
        let c = constraint(RelationalOperator::EqualTo);
        assert!(c.is_met(5.2));
        assert!(!c.is_met(15.0));

        let c = constraint(RelationalOperator::NotEqualTo);
        assert!(!c.is_met(5.2));
        assert!(c.is_met(15.0));

        let c = constraint(RelationalOperator::GreaterThan);
        assert!(!c.is_met(5.2));
        assert!(c.is_met(15.0));
        assert!(!c.is_met(1.0));

        let c = constraint(RelationalOperator::GreaterOrEqualTo);
        assert!(c.is_met(5.2));
        assert!(c.is_met(15.0));
        assert!(!c.is_met(1.0));

        let c = constraint(RelationalOperator::LessThan);
        assert!(!c.is_met(5.2));
        assert!(c.is_met(1.0));
        assert!(!c.is_met(15.0));

        let c = constraint(RelationalOperator::LessOrEqualTo);
        assert!(c.is_met(c.evaluate(&[5.2])));
        assert!(!c.is_met(c.evaluate(&[15.0])));
        assert!(c.is_met(c.evaluate(&[1.0])));
    }

    #[test]
    fn test_constraint_violation() {
        let c = constraint(RelationalOperator::EqualTo);
        assert_eq!(c.constraint_violation(5.2), 0.0);
        assert_approx_eq!(f64, c.constraint_violation(1.2), 4.0, epsilon = 0.001);
        assert_approx_eq!(f64, c.constraint_violation(-1.2), 6.4, epsilon = 0.001);

        let c = constraint(RelationalOperator::NotEqualTo);
        assert_eq!(c.constraint_violation(5.2), 1.0);
        assert_eq!(c.constraint_violation(1.0), 0.0);

        let c = constraint(RelationalOperator::LessThan);
        assert_eq!(c.constraint_violation(0.0), 0.0);
        assert_approx_eq!(f64, c.constraint_violation(9.2), 4.0, epsilon = 0.001);

        let c = constraint(RelationalOperator::GreaterOrEqualTo);
        assert_eq!(c.constraint_violation(10.0), 0.0);
        assert_eq!(c.constraint_violation(5.2), 0.0);
        assert_approx_eq!(f64, c.constraint_violation(2.2), 3.0, epsilon = 0.001);
    }
}
