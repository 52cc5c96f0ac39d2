pub use comparison::{
    pareto_dominance, BinaryComparisonOperator, DominancePolicy, ParetoConstrainedDominance,
    ParetoDominance, PreferredSolution,
};
pub use selector::{
    CrowdingDistanceSelector, FarthestCandidateSelector, FrontSelectorType, Selector,
};
pub use survival::NonDominatedSortingSelector;
pub use updater::{NSLSUpdater, NSLSUpdaterArgs, Updater};

pub mod comparison;
pub mod selector;
pub mod survival;
pub mod updater;
