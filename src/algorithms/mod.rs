pub use algorithm::{Algorithm, AlgorithmExport, AlgorithmSerialisedExport, Elapsed};
pub use nsls::{NSLSArg, DEFAULT_POPULATION_GRANULARITY, NSLS};
pub use stopping_condition::{
    MaxDuration, MaxGeneration, StoppingCondition, StoppingConditionType,
};

mod algorithm;
mod nsls;
mod stopping_condition;
