pub use crowding_distance::set_crowding_distance;
pub use fast_non_dominated_sort::{fast_non_dominated_sort, NonDominatedSortResults};
pub use vectors::{argsort, vector_min, Sort};

mod crowding_distance;
mod fast_non_dominated_sort;
mod vectors;
