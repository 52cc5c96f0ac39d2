use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Individual, NslsError};
use crate::utils::{argsort, set_crowding_distance, Sort};

/// A trait implementing methods to reduce a non-dominated front to a smaller number of individuals
/// while preserving its diversity.
pub trait Selector {
    /// Select `number_of_individuals` individuals from `individuals`. This returns an error if
    /// more individuals are requested than available.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The individuals in the front.
    /// * `number_of_individuals`: The number of individuals to keep.
    ///
    /// returns: `Result<Vec<Individual>, NslsError>`
    fn select(
        &self,
        individuals: &[Individual],
        number_of_individuals: usize,
    ) -> Result<Vec<Individual>, NslsError>;

    /// The selector name.
    ///
    /// returns: `String`
    fn name(&self) -> String;

    /// Check that enough individuals are available.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The individuals in the front.
    /// * `number_of_individuals`: The number of individuals to keep.
    ///
    /// returns: `Result<(), NslsError>`
    fn check_size(
        &self,
        individuals: &[Individual],
        number_of_individuals: usize,
    ) -> Result<(), NslsError> {
        if number_of_individuals > individuals.len() {
            return Err(NslsError::SelectorOperator(
                self.name(),
                format!(
                    "Cannot select {} individuals from a front with {} individuals",
                    number_of_individuals,
                    individuals.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Greedy farthest-candidate sampling of a non-dominated front. The individuals with the minimum
/// and maximum value of each objective are accepted first; then, the candidate whose objective
/// vector is the farthest (Euclidean distance) from the closest accepted individual is accepted,
/// until the requested number of individuals is reached.
///
/// The distance to the closest accepted individual is stored with [`Individual::set_distance`]
/// on the returned individuals that were not accepted as extremes; extremes keep an infinite
/// distance.
///
/// See:
/// > B. Chen, W. Zeng, Y. Lin and D. Zhang, "A New Local Search-Based Multiobjective Optimization
/// > Algorithm," in IEEE Transactions on Evolutionary Computation, vol. 19, no. 1, pp. 50-73,
/// > Feb. 2015, doi: 10.1109/TEVC.2014.2301794.
pub struct FarthestCandidateSelector;

impl FarthestCandidateSelector {
    /// Find the first individual with the minimum or maximum value of an objective.
    fn extreme(individuals: &[Individual], objective_idx: usize, minimum: bool) -> usize {
        let mut best = 0;
        for (idx, individual) in individuals.iter().enumerate().skip(1) {
            let value = individual.objectives()[objective_idx];
            let best_value = individuals[best].objectives()[objective_idx];
            if (minimum && value < best_value) || (!minimum && value > best_value) {
                best = idx;
            }
        }
        best
    }
}

impl Selector for FarthestCandidateSelector {
    fn select(
        &self,
        individuals: &[Individual],
        number_of_individuals: usize,
    ) -> Result<Vec<Individual>, NslsError> {
        self.check_size(individuals, number_of_individuals)?;
        let number_of_objectives = individuals
            .first()
            .map_or(0, |i| i.objectives().len());
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
        if number_of_individuals == individuals.len() {
            return Ok(individuals.to_vec());
        }
        if number_of_individuals == 0 {
            return Ok(vec![]);
        }

        let mut accepted = vec![false; individuals.len()];
        let mut selected: Vec<usize> = Vec::with_capacity(number_of_individuals);

        // boundary individuals
        for m in 0..number_of_objectives {
            for minimum in [true, false] {
                let idx = Self::extreme(individuals, m, minimum);
                if !accepted[idx] && selected.len() < number_of_individuals {
                    accepted[idx] = true;
                    selected.push(idx);
                }
            }
        }
        debug!("Accepted {} boundary individuals", selected.len());

        // distance to the closest accepted individual
        let mut distances = vec![f64::INFINITY; individuals.len()];
        for (idx, candidate) in individuals.iter().enumerate() {
            if accepted[idx] {
                continue;
            }
            for s in selected.iter() {
                distances[idx] = distances[idx].min(candidate.objective_distance(&individuals[*s]));
            }
        }

        while selected.len() < number_of_individuals {
            let mut farthest: Option<usize> = None;
            let mut max_distance = -1.0;
            for (idx, distance) in distances.iter().enumerate() {
                if !accepted[idx] && *distance > max_distance {
                    max_distance = *distance;
                    farthest = Some(idx);
                }
            }
            let Some(farthest) = farthest else {
                return Err(NslsError::SelectorOperator(
                    self.name(),
                    "No candidate left to accept".to_string(),
                ));
            };

            accepted[farthest] = true;
            selected.push(farthest);
            for (idx, candidate) in individuals.iter().enumerate() {
                if !accepted[idx] {
                    distances[idx] =
                        distances[idx].min(candidate.objective_distance(&individuals[farthest]));
                }
            }
        }

        Ok(selected
            .into_iter()
            .map(|idx| {
                let mut individual = individuals[idx].clone();
                individual.set_distance(distances[idx]);
                individual
            })
            .collect())
    }

    fn name(&self) -> String {
        "FarthestCandidateSelector".to_string()
    }
}

/// Keep the individuals with the largest crowding distance (see [`set_crowding_distance`]).
/// Individuals with the same distance keep their order in the front.
pub struct CrowdingDistanceSelector;

impl Selector for CrowdingDistanceSelector {
    fn select(
        &self,
        individuals: &[Individual],
        number_of_individuals: usize,
    ) -> Result<Vec<Individual>, NslsError> {
        self.check_size(individuals, number_of_individuals)?;

        let mut front = individuals.to_vec();
        set_crowding_distance(&mut front)?;
        let distances: Vec<f64> = front.iter().map(|i| i.distance()).collect();

        Ok(argsort(&distances, Sort::Descending)
            .into_iter()
            .take(number_of_individuals)
            .map(|idx| front[idx].clone())
            .collect())
    }

    fn name(&self) -> String {
        "CrowdingDistanceSelector".to_string()
    }
}

/// The strategy used to truncate the last front that does not entirely fit in the next
/// population.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum FrontSelectorType {
    /// Use the [`FarthestCandidateSelector`].
    #[default]
    FarthestCandidate,
    /// Use the [`CrowdingDistanceSelector`].
    CrowdingDistance,
}

impl FrontSelectorType {
    /// Get the selector.
    ///
    /// returns: `Box<dyn Selector>`
    pub fn selector(&self) -> Box<dyn Selector> {
        match self {
            FrontSelectorType::FarthestCandidate => Box::new(FarthestCandidateSelector),
            FrontSelectorType::CrowdingDistance => Box::new(CrowdingDistanceSelector),
        }
    }
}
