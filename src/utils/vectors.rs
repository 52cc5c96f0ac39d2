use crate::core::NslsError;

/// Define the sort type
#[derive(PartialEq)]
pub enum Sort {
    /// Sort values in ascending order
    Ascending,
    /// Sort values in descending order
    Descending,
}

/// Returns the indices that would sort an array. The sort is stable: equal values keep their
/// original relative order in both directions.
///
/// # Arguments
///
/// * `data`: The vector to sort.
/// * `sort_type`: Specify whether to sort in ascending or descending order.
///
/// returns: `Vec<usize>`. The vector with the indices.
pub fn argsort(data: &[f64], sort_type: Sort) -> Vec<usize> {
    let mut indices = (0..data.len()).collect::<Vec<_>>();
    match sort_type {
        Sort::Ascending => indices.sort_by(|a, b| data[*a].total_cmp(&data[*b])),
        Sort::Descending => indices.sort_by(|a, b| data[*b].total_cmp(&data[*a])),
    }
    indices
}

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, NslsError>`
pub fn vector_min(v: &[f64]) -> Result<f64, NslsError> {
    v.iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(NslsError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))
}
