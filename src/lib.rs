//! Multi-objective optimisation with the Neighborhood-based Local Search (NSLS) algorithm.
//!
//! The crate evolves a population of candidate solutions toward the Pareto-optimal front of a
//! problem described by bounded real variables, objective functions to minimise and optional
//! constraints. See [`algorithms::NSLS`] for the solver.
pub mod algorithms;
pub mod core;
pub mod metrics;
pub mod operators;
pub mod utils;
