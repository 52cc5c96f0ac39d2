pub use constraint::{Constraint, RelationalOperator};
pub use error::NslsError;
pub use individual::{Individual, IndividualExport, Population};
pub use objective::{Evaluable, Objective};
pub use problem::{builtin_problems, Problem, ProblemExport};
pub use variable::BoundedNumber;

pub mod constraint;
pub mod error;
pub mod individual;
pub mod objective;
pub mod problem;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod utils;
pub mod variable;
