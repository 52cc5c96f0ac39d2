use log::debug;

use crate::core::{Individual, NslsError};
use crate::operators::{BinaryComparisonOperator, FrontSelectorType, Selector};
use crate::utils::fast_non_dominated_sort;

/// Elitist environmental selection. The individuals are sorted into non-dominated fronts, which
/// are added to the next population until it almost reaches its target size. When the last front
/// does not fit, the front selector picks the individuals needed to complete the population.
///
/// This implements the algorithm at the bottom of page 186 in:
/// > K. Deb, A. Pratap, S. Agarwal and T. Meyarivan, "A fast and elitist multi-objective genetic
/// > algorithm: NSGA-II," in IEEE Transactions on Evolutionary Computation, vol. 6, no. 2, pp.
/// > 182-197, April 2002, doi: 10.1109/4235.996017.
pub struct NonDominatedSortingSelector {
    /// The operator to use to truncate the last front.
    front_selector: Box<dyn Selector>,
}

impl NonDominatedSortingSelector {
    /// Create the selector.
    ///
    /// # Arguments
    ///
    /// * `front_selector`: The strategy to use to truncate the last front.
    ///
    /// returns: `NonDominatedSortingSelector`
    pub fn new(front_selector: &FrontSelectorType) -> Self {
        Self {
            front_selector: front_selector.selector(),
        }
    }

    /// Select `number_of_individuals` individuals. Every returned individual has its rank set to
    /// the index of the front it belongs to. This returns an error if the individuals are fewer
    /// than `number_of_individuals`.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The individuals to select from (parents and offspring).
    /// * `number_of_individuals`: The size of the next population.
    /// * `operator`: The operator assessing the dominance between two individuals.
    ///
    /// returns: `Result<Vec<Individual>, NslsError>`
    pub fn select(
        &self,
        individuals: &[Individual],
        number_of_individuals: usize,
        operator: &dyn BinaryComparisonOperator,
    ) -> Result<Vec<Individual>, NslsError> {
        if number_of_individuals > individuals.len() {
            return Err(NslsError::SurvivalOperator(
                "NonDominatedSortingSelector".to_string(),
                format!(
                    "Cannot select {} individuals from a population with {} individuals",
                    number_of_individuals,
                    individuals.len()
                ),
            ));
        }

        let sorting_results = fast_non_dominated_sort(individuals, operator)?;
        debug!("Collected {} fronts", sorting_results.fronts.len());

        let mut new_population: Vec<Individual> = Vec::with_capacity(number_of_individuals);
        for (fi, front) in sorting_results.fronts.into_iter().enumerate() {
            if new_population.len() == number_of_individuals {
                debug!("Population reached target size");
                break;
            }
            if new_population.len() + front.len() <= number_of_individuals {
                debug!("Adding front #{} (size: {})", fi + 1, front.len());
                new_population.extend(front);
            } else {
                let missing = number_of_individuals - new_population.len();
                debug!(
                    "Selecting {} individuals from front #{} (size: {}) with {}",
                    missing,
                    fi + 1,
                    front.len(),
                    self.front_selector.name()
                );
                let mut selected = self.front_selector.select(&front, missing)?;
                for individual in selected.iter_mut() {
                    individual.set_rank(fi);
                }
                new_population.extend(selected);
                break;
            }
        }

        Ok(new_population)
    }
}
