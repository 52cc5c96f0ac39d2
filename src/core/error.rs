use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum NslsError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("You must provide at least one objective to properly define a problem")]
    NoObjective,
    #[error("You must provide at least one variable to properly define a problem")]
    NoVariables,
    #[error("The {0} type named '{1}' already exist")]
    DuplicatedName(String, String),
    #[error("The {0} index {1} does not exist")]
    NonExistingIndex(String, usize),
    #[error("The min value ({0}) must be strictly smaller than the max value ({1}).")]
    TooLargeLowerBound(String, String),
    #[error("The bounds of variable '{0}' must be finite numbers, but [{1}; {2}] were given")]
    NonFiniteBound(String, f64, f64),
    #[error("The value {1} of variable '{0}' is outside its bounds [{2}; {3}]")]
    OutOfBounds(String, f64, f64, f64),
    #[error("The vector of {0} has length {1}, but {2} items were expected")]
    WrongLength(String, usize, usize),
    #[error("An error occurred in the comparison operator '{0}': {1}")]
    ComparisonOperator(String, String),
    #[error("An error occurred in the selector operator '{0}': {1}")]
    SelectorOperator(String, String),
    #[error("An error occurred in the survival operator '{0}': {1}")]
    SurvivalOperator(String, String),
    #[error("An error occurred in the updater operator '{0}': {1}")]
    UpdaterOperator(String, String),
    #[error("An error occurred in the calculation of the '{0}' metric: {1}")]
    Metric(String, String),
    #[error("An error occurred when initialising {0}: {1}")]
    AlgorithmInit(String, String),
    #[error("An error occurred when running {0}: {1}")]
    AlgorithmRun(String, String),
    #[error("An error occurred when exporting the algorithm data: {0}")]
    AlgorithmExport(String),
    #[error("NaN detected when evaluating {0} '{1}'. This may be an error in the user-defined evaluation function")]
    NaN(String, String),
}
