use log::debug;

use crate::core::{Individual, NslsError};
use crate::utils::{argsort, Sort};

/// Calculate the crowding distance (with complexity $O(M * N log(N))$, where `M` is the number
/// of objectives and `N` the number of individuals) and store it with
/// [`Individual::set_distance`].
///
/// The distance of every individual is first reset to `0`. With more than two individuals, for
/// each objective the individuals are sorted in ascending order and every non-boundary individual
/// accumulates the (not normalised) difference between the objectives of its two neighbours.
/// Finally, for each objective, the individual with the minimum value (the first one on ties)
/// gets an infinite distance. The individual with the maximum value is not treated as a boundary.
///
/// Adapted from paragraph 3B in:
/// > K. Deb, A. Pratap, S. Agarwal and T. Meyarivan, "A fast and elitist multi-objective genetic
/// > algorithm: NSGA-II," in IEEE Transactions on Evolutionary Computation, vol. 6, no. 2, pp.
/// > 182-197, April 2002, doi: 10.1109/4235.996017.
///
/// # Arguments
///
/// * `individuals`: The individuals in a non-dominated front.
///
/// returns: `Result<(), NslsError>`
pub fn set_crowding_distance(individuals: &mut [Individual]) -> Result<(), NslsError> {
    for individual in individuals.iter_mut() {
        individual.set_distance(0.0);
    }
    let Some(first) = individuals.first() else {
        return Ok(());
    };
    let number_of_objectives = first.objectives().len();
    if let Some(i) = individuals
        .iter()
        .find(|i| i.objectives().len() != number_of_objectives)
    {
        return Err(NslsError::WrongLength(
            "objectives".to_string(),
            i.objectives().len(),
            number_of_objectives,
        ));
    }

    let total_individuals = individuals.len();
    if total_individuals > 2 {
        for m in 0..number_of_objectives {
            let obj_values: Vec<f64> = individuals.iter().map(|i| i.objectives()[m]).collect();
            let sorted_idx = argsort(&obj_values, Sort::Ascending);

            for pos in 1..(total_individuals - 1) {
                let delta = obj_values[sorted_idx[pos + 1]] - obj_values[sorted_idx[pos - 1]];
                let individual = &mut individuals[sorted_idx[pos]];
                individual.set_distance(individual.distance() + delta);
            }
        }
    } else {
        debug!("Only the boundary distance is set. At least 3 individuals are needed");
    }

    for m in 0..number_of_objectives {
        let mut min_index = 0;
        for (idx, individual) in individuals.iter().enumerate().skip(1) {
            if individual.objectives()[m] < individuals[min_index].objectives()[m] {
                min_index = idx;
            }
        }
        individuals[min_index].set_distance(f64::INFINITY);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::individuals_from_obj_values_dummy;
    use crate::core::Individual;
    use crate::utils::set_crowding_distance;

    #[test]
    /// Test the crowding distance algorithm (not enough points).
    fn test_crowding_distance_not_enough_points() {
        let mut individuals = individuals_from_obj_values_dummy(&[[0.0, 50.0], [50.0, 0.0]]);
        individuals[0].set_distance(12.0);
        individuals[1].set_distance(5.0);
        set_crowding_distance(&mut individuals).unwrap();
        // each one is the minimum of one objective
        assert_eq!(individuals[0].distance(), f64::INFINITY);
        assert_eq!(individuals[1].distance(), f64::INFINITY);

        // the second is the minimum of both objectives
        let mut individuals = individuals_from_obj_values_dummy(&[[1.0, 1.0], [0.0, 0.0]]);
        set_crowding_distance(&mut individuals).unwrap();
        assert_eq!(individuals[0].distance(), 0.0);
        assert_eq!(individuals[1].distance(), f64::INFINITY);
    }

    #[test]
    /// Test the crowding distance algorithm (4 points). Only the point with the minimum of
    /// each objective gets an infinite distance.
    fn test_crowding_distance_4points() {
        let mut individuals = individuals_from_obj_values_dummy(&[
            [0.0, 0.0],
            [100.0, -100.0],
            [200.0, -200.0],
            [400.0, -400.0],
        ]);
        set_crowding_distance(&mut individuals).unwrap();

        // min of objective #1
        assert_eq!(individuals[0].distance(), f64::INFINITY);
        // 200 in each objective
        assert_eq!(individuals[1].distance(), 400.0);
        // 300 in each objective
        assert_eq!(individuals[2].distance(), 600.0);
        // min of objective #2
        assert_eq!(individuals[3].distance(), f64::INFINITY);
    }

    #[test]
    /// The maximum of an objective is not a boundary point.
    fn test_crowding_distance_min_side_only() {
        let mut individuals =
            individuals_from_obj_values_dummy(&[[1.0, 5.0], [2.0, 4.0], [3.0, 3.0], [4.0, 2.0]]);
        // the first point is now the minimum of both objectives
        individuals[0] = Individual::new(vec![], vec![1.0, 1.0], vec![]);
        set_crowding_distance(&mut individuals).unwrap();

        assert_eq!(individuals[0].distance(), f64::INFINITY);
        // objective #1: sorted 0, 1, 2, 3 -> 1 gets 3-1, 2 gets 4-2
        // objective #2: sorted 0, 3, 2, 1 -> 3 gets 3-1, 2 gets 4-2
        assert_approx_eq!(f64, individuals[1].distance(), 2.0, epsilon = 0.0001);
        assert_approx_eq!(f64, individuals[2].distance(), 4.0, epsilon = 0.0001);
        // the last point is the max of objective #1 but is not set to infinite
        assert_approx_eq!(f64, individuals[3].distance(), 2.0, epsilon = 0.0001);
    }

    #[test]
    /// Test the crowding distance algorithm (6 points).
    fn test_crowding_distance_6points() {
        let mut individuals = individuals_from_obj_values_dummy(&[
            [1.1, 8.1],
            [2.1, 6.1],
            [3.1, 4.1],
            [5.1, 3.1],
            [8.1, 2.1],
            [11.1, 1.1],
        ]);
        set_crowding_distance(&mut individuals).unwrap();

        let expected = [f64::INFINITY, 6.0, 6.0, 7.0, 8.0, f64::INFINITY];
        for (individual, value) in individuals.iter().zip(expected) {
            if value.is_infinite() {
                assert_eq!(individual.distance(), value);
            } else {
                assert_approx_eq!(f64, individual.distance(), value, epsilon = 0.001);
            }
        }
    }

    #[test]
    fn test_empty() {
        let mut individuals: Vec<Individual> = vec![];
        assert!(set_crowding_distance(&mut individuals).is_ok());
    }
}
