use std::ops::Range;

use crate::core::Individual;

/// Create the individuals for a `N`-objective dummy problem, where `N` is the number of items in
/// the arrays of `objective_values`. The individuals have no variables and no constraints.
///
/// # Arguments
///
/// * `objective_values`: The objective values to set on the individuals. A number of individuals
///    equal to this vector size will be created.
///
/// returns: `Vec<Individual>`
pub(crate) fn individuals_from_obj_values_dummy<const N: usize>(
    objective_values: &[[f64; N]],
) -> Vec<Individual> {
    objective_values
        .iter()
        .map(|values| Individual::new(vec![], values.to_vec(), vec![]))
        .collect()
}

/// Get the vector values outside a lower and upper bounds.
///
/// # Arguments
///
/// * `vector`: The vector.
/// * `range`: The range.
///
/// returns: `Vec<f64>` The values outside the range.
pub(crate) fn check_value_in_range(vector: &[f64], range: &Range<f64>) -> Vec<f64> {
    vector
        .iter()
        .filter_map(|v| if !range.contains(v) { Some(*v) } else { None })
        .collect()
}
