use crate::core::{Individual, NslsError};
use crate::operators::ParetoDominance;
use crate::utils::{fast_non_dominated_sort, vector_min};

static DISTANCE_NAME: &str = "Distance";

/// Get the individuals in the first non-dominated front. Constraints are not considered.
///
/// # Arguments
///
/// * `individuals`: The individuals.
///
/// returns: `Result<Vec<Individual>, NslsError>`
pub fn non_dominated(individuals: &[Individual]) -> Result<Vec<Individual>, NslsError> {
    let mut sorting_results = fast_non_dominated_sort(individuals, &ParetoDominance)?;
    if sorting_results.fronts.is_empty() {
        return Err(NslsError::Metric(
            "non-dominated front".to_string(),
            "The vector of individuals is empty".to_string(),
        ));
    }
    Ok(sorting_results.fronts.swap_remove(0))
}

/// Calculate the average distance of the solution variables in the first non-dominated front from
/// the origin, skipping the first variable:
///
/// $ GDPS = \frac{1}{| A |} \sum_{a \in A } \sqrt{ \sum_{k=2}^{D} x_k^2 } $
///
/// This measures the convergence in the variable space for problems, such as ZDT or LZ1, whose
/// Pareto set has all the variables but the first one equal to `0`.
///
/// # Arguments
///
/// * `individuals`: The individuals.
///
/// returns: `Result<f64, NslsError>`
pub fn gdps(individuals: &[Individual]) -> Result<f64, NslsError> {
    let front = non_dominated(individuals)?;
    let total: f64 = front
        .iter()
        .map(|i| {
            i.variables()
                .iter()
                .skip(1)
                .map(|x| x.powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .sum();
    Ok(total / front.len() as f64)
}

/// This struct allows calculation of the following metrics to assess the performance of an
/// algorithm, using the first non-dominated front $A$ of a population and a reference front $R$:
/// 1) Generational Distance (GD)
///
/// $  GD (A, R) =  \frac{1}{| A |} \cdot \[ \sum_{a \in A } min_{r \in R} \quad  d(a, r)^2 \]^{1/2} $
///
/// 2) Inverted Generational Distance (IGD)
///
/// $  IGD (A, R) = \frac{1}{| R |} \cdot \sum_{r \in R } min_{a \in A} \quad  d(r, a) $
///
/// 3) Convergence
///
/// $  C (A, R) = \frac{1}{| A |} \cdot \sum_{a \in A } min_{r \in R} \quad  d(a, r) $
///
/// 4) Diversity ($\Delta$), measuring the spread of the front (see [`Distance::diversity`]).
///
/// where $d$ is the Euclidean distance between the objective vectors.
pub struct Distance<'a> {
    /// The first non-dominated front.
    front: Vec<Individual>,
    /// The reference points. This should be either the true Pareto front or its good
    /// approximation.
    reference_front: &'a [Vec<f64>],
}

impl<'a> Distance<'a> {
    /// Create the distance metric. This returns an error if the individuals or reference points
    /// are empty, or if the size of a reference point does not equal the number of objectives.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The vector of individuals. Only the first non-dominated front is used.
    /// * `reference_front`: The reference points to use to calculate the distance. The length of
    ///    each point must be `M`.
    ///
    /// returns: `Result<Distance, NslsError>`
    pub fn new(
        individuals: &[Individual],
        reference_front: &'a [Vec<f64>],
    ) -> Result<Self, NslsError> {
        if individuals.is_empty() {
            return Err(NslsError::Metric(
                DISTANCE_NAME.to_string(),
                "The vector of individuals is empty".to_string(),
            ));
        }
        if reference_front.is_empty() {
            return Err(NslsError::Metric(
                DISTANCE_NAME.to_string(),
                "The vector of reference points is empty".to_string(),
            ));
        }
        let number_of_objectives = individuals[0].objectives().len();
        if reference_front
            .iter()
            .any(|r| r.len() != number_of_objectives)
        {
            return Err(NslsError::Metric(
                DISTANCE_NAME.to_string(),
                "Each reference point must have a size equal to the number of objectives"
                    .to_string(),
            ));
        }

        Ok(Self {
            front: non_dominated(individuals)?,
            reference_front,
        })
    }

    /// Calculate the generational distance (GD).
    ///
    /// returns: `Result<f64, NslsError>`
    pub fn gd(&self) -> Result<f64, NslsError> {
        let total = self
            .min_distances_to_reference()?
            .iter()
            .map(|d| d.powi(2))
            .sum::<f64>();
        Ok(total.sqrt() / self.front.len() as f64)
    }

    /// Calculate the inverted generational distance (IGD).
    ///
    /// returns: `Result<f64, NslsError>`
    pub fn igd(&self) -> Result<f64, NslsError> {
        let mut total = 0.0;
        for r in self.reference_front {
            let distances: Vec<f64> = self
                .front
                .iter()
                .map(|a| Self::euclidean_distance(a.objectives(), r))
                .collect();
            total += vector_min(&distances)?;
        }
        Ok(total / self.reference_front.len() as f64)
    }

    /// Calculate the convergence metric.
    ///
    /// returns: `Result<f64, NslsError>`
    pub fn convergence(&self) -> Result<f64, NslsError> {
        let distances = self.min_distances_to_reference()?;
        Ok(distances.iter().sum::<f64>() / self.front.len() as f64)
    }

    /// Calculate the diversity metric:
    ///
    /// $ \Delta = \frac{\sum_{m=1}^{M} d^e_m + \sum_{a \in A} | d_a - \bar{d} |}{\sum_{m=1}^{M} d^e_m + (| A | - M) \bar{d}} $
    ///
    /// where $d^e_m$ is the distance between the reference point with the minimum value of the
    /// `m`-th objective and the closest (non-coincident) point in the front, $d_a$ the distance
    /// between a point and its closest neighbour in the front and $\bar{d}$ the mean of $d_a$.
    /// This returns an error if the front has fewer than two points or when the denominator is
    /// not positive, which may happen when the front has fewer points than objectives.
    ///
    /// # Reference
    /// > K. Deb, A. Pratap, S. Agarwal and T. Meyarivan, "A fast and elitist multi-objective genetic
    /// > algorithm: NSGA-II," in IEEE Transactions on Evolutionary Computation, vol. 6, no. 2, pp.
    /// > 182-197, April 2002, doi: 10.1109/4235.996017.
    ///
    /// returns: `Result<f64, NslsError>`
    pub fn diversity(&self) -> Result<f64, NslsError> {
        let size = self.front.len();
        if size < 2 {
            return Err(NslsError::Metric(
                "Diversity".to_string(),
                "At least two non-dominated individuals are needed".to_string(),
            ));
        }
        let number_of_objectives = self.reference_front[0].len();

        // extreme points of the reference front
        let mut extreme_sum = 0.0;
        for m in 0..number_of_objectives {
            let mut extreme = &self.reference_front[0];
            for r in self.reference_front.iter().skip(1) {
                if r[m] < extreme[m] {
                    extreme = r;
                }
            }
            extreme_sum += self
                .front
                .iter()
                .map(|a| Self::euclidean_distance(a.objectives(), extreme))
                .filter(|d| *d > 0.0)
                .fold(f64::MAX, f64::min);
        }

        // distance of each point to its closest neighbour
        let neighbour_distances: Vec<f64> = self
            .front
            .iter()
            .enumerate()
            .map(|(i, a)| {
                self.front
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, b)| a.objective_distance(b))
                    .fold(f64::MAX, f64::min)
            })
            .collect();
        let mean_distance = neighbour_distances.iter().sum::<f64>() / size as f64;
        let deviation: f64 = neighbour_distances
            .iter()
            .map(|d| (d - mean_distance).abs())
            .sum();

        let denominator =
            extreme_sum + (size as f64 - number_of_objectives as f64) * mean_distance;
        if denominator <= 0.0 {
            return Err(NslsError::Metric(
                "Diversity".to_string(),
                format!("The spread denominator ({denominator}) must be strictly positive"),
            ));
        }
        Ok((extreme_sum + deviation) / denominator)
    }

    /// Get the first non-dominated front used to calculate the metrics.
    ///
    /// returns: `&[Individual]`
    pub fn front(&self) -> &[Individual] {
        &self.front
    }

    /// The distance of each front point to its closest reference point.
    fn min_distances_to_reference(&self) -> Result<Vec<f64>, NslsError> {
        self.front
            .iter()
            .map(|a| {
                let distances: Vec<f64> = self
                    .reference_front
                    .iter()
                    .map(|r| Self::euclidean_distance(a.objectives(), r))
                    .collect();
                vector_min(&distances)
            })
            .collect()
    }

    fn euclidean_distance(a: &[f64], r: &[f64]) -> f64 {
        a.iter()
            .zip(r)
            .map(|(a_k, r_k)| (a_k - r_k).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::individuals_from_obj_values_dummy;
    use crate::core::Individual;
    use crate::metrics::{gdps, non_dominated, Distance};

    #[test]
    /// Only the first front is used.
    fn test_non_dominated() {
        let individuals =
            individuals_from_obj_values_dummy(&[[1.0, 1.0], [2.0, 2.0], [0.0, 3.0], [3.0, 0.5]]);
        let front = non_dominated(&individuals).unwrap();
        assert_eq!(front.len(), 3);
        assert!(non_dominated(&[]).is_err());
    }

    #[test]
    /// Test the distance metrics against values calculated by hand.
    fn test_distances() {
        // the dominated point [5, 5] is ignored
        let individuals =
            individuals_from_obj_values_dummy(&[[0.0, 1.0], [1.0, 0.0], [5.0, 5.0]]);
        let reference_front = vec![vec![0.0, 0.0], vec![0.0, 2.0], vec![2.0, 0.0]];
        let metric = Distance::new(&individuals, &reference_front).unwrap();
        assert_eq!(metric.front().len(), 2);

        // each point is 1 from [0, 0]
        assert_approx_eq!(f64, metric.convergence().unwrap(), 1.0, epsilon = 0.00001);
        assert_approx_eq!(
            f64,
            metric.gd().unwrap(),
            2.0_f64.sqrt() / 2.0,
            epsilon = 0.00001
        );
        // every reference point is 1 away from the closest front point
        assert_approx_eq!(f64, metric.igd().unwrap(), 1.0, epsilon = 0.00001);
    }

    #[test]
    /// Wrong inputs return an error.
    fn test_errors() {
        let individuals = individuals_from_obj_values_dummy(&[[0.0, 1.0], [1.0, 0.0]]);
        assert!(Distance::new(&individuals, &[]).is_err());
        assert!(Distance::new(&[], &[vec![0.0, 0.0]]).is_err());
        assert!(Distance::new(&individuals, &[vec![0.0, 0.0, 1.0]]).is_err());

        let single = individuals_from_obj_values_dummy(&[[0.0, 1.0]]);
        let reference_front = vec![vec![0.0, 0.0]];
        let metric = Distance::new(&single, &reference_front).unwrap();
        assert!(metric.diversity().is_err());
    }

    #[test]
    /// A uniformly distributed front covering the extremes has zero diversity deviation.
    fn test_diversity() {
        let individuals = individuals_from_obj_values_dummy(&[
            [0.0, 3.0],
            [1.0, 2.0],
            [2.0, 1.0],
            [3.0, 0.0],
        ]);
        let reference_front = vec![vec![0.0, 3.0], vec![3.0, 0.0]];
        let metric = Distance::new(&individuals, &reference_front).unwrap();
        // the extremes coincide with front points; the closest non-coincident points are
        // sqrt(2) away, as all the neighbour distances
        let d = 2.0_f64.sqrt();
        let expected = (2.0 * d) / (2.0 * d + 2.0 * d);
        assert_approx_eq!(f64, metric.diversity().unwrap(), expected, epsilon = 0.00001);
    }

    #[test]
    /// A front with fewer points than objectives may have a negative spread denominator.
    fn test_diversity_small_front() {
        let individuals = individuals_from_obj_values_dummy(&[[0.0, 0.0, 10.0], [10.0, 0.0, 0.0]]);
        // each extreme is 0.1 away from a front point, the two points are sqrt(200) apart
        let reference_front = vec![vec![0.0, 0.0, 10.1], vec![10.1, 0.0, 0.0]];
        let metric = Distance::new(&individuals, &reference_front).unwrap();
        assert!(metric.diversity().is_err());
    }

    #[test]
    fn test_gdps() {
        let individuals = vec![
            Individual::new(vec![0.5, 3.0, 4.0], vec![0.0, 1.0], vec![]),
            Individual::new(vec![0.1, 0.0, 1.0], vec![1.0, 0.0], vec![]),
            // dominated
            Individual::new(vec![0.1, 10.0, 10.0], vec![2.0, 2.0], vec![]),
        ];
        assert_approx_eq!(f64, gdps(&individuals).unwrap(), 3.0, epsilon = 0.00001);
    }
}
