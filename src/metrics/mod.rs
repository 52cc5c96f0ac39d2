pub use distance::{gdps, non_dominated, Distance};

mod distance;
