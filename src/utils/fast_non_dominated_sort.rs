use std::collections::VecDeque;

use crate::core::{Individual, NslsError};
use crate::operators::{BinaryComparisonOperator, PreferredSolution};

/// Outputs of the non-dominated sort algorithm.
#[derive(Debug)]
pub struct NonDominatedSortResults {
    /// A vector containing sub-vectors. Each child vector represents a front (with the first being
    /// the primary non-dominated front with solutions of rank 0); each child vector contains
    /// copies of the individuals belonging to that front, in input order, with their rank set to
    /// the front index.
    pub fronts: Vec<Vec<Individual>>,
    /// This is [`NonDominatedSortResults::fronts`], but the individuals are given as indexes
    /// instead of copies. Each index refers to the vector of individuals passed to
    /// [`fast_non_dominated_sort`].
    pub front_indexes: Vec<Vec<usize>>,
    /// The rank (front index) of the individual at a given vector index.
    pub ranks: Vec<usize>,
    /// Number of individuals that dominates a solution at a given vector index. When the counter
    /// is 0, the solution is non-dominated.
    pub domination_counter: Vec<usize>,
}

/// The dominance relation among a set of individuals stored as an adjacency list. Nodes are the
/// indexes of the individuals; an edge `p -> q` means that `p` dominates `q`.
#[derive(Debug, Default)]
pub(crate) struct DominanceGraph {
    /// The individuals dominated by the node at the vector index.
    edges: Vec<Vec<usize>>,
    /// The number of individuals dominating the node at the vector index.
    in_degree: Vec<usize>,
}

impl DominanceGraph {
    /// Build the graph by comparing every pair of individuals.
    ///
    /// # Arguments
    ///
    /// * `individuals`: The individuals.
    /// * `operator`: The operator assessing the dominance between two individuals.
    ///
    /// returns: `Result<DominanceGraph, NslsError>`
    pub(crate) fn new(
        individuals: &[Individual],
        operator: &dyn BinaryComparisonOperator,
    ) -> Result<Self, NslsError> {
        let n = individuals.len();
        let mut graph = Self {
            edges: vec![Vec::new(); n],
            in_degree: vec![0; n],
        };

        for pi in 0..n {
            for qi in (pi + 1)..n {
                match operator.compare(&individuals[pi], &individuals[qi])? {
                    PreferredSolution::First => graph.add_edge(pi, qi),
                    PreferredSolution::Second => graph.add_edge(qi, pi),
                    PreferredSolution::MutuallyPreferred => {}
                }
            }
        }
        Ok(graph)
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.edges[from].push(to);
        self.in_degree[to] += 1;
    }

    /// Layer the graph breadth-first. Nodes with no incoming edge get rank `0`; a node gets the
    /// rank of the node that removed its last incoming edge plus one.
    ///
    /// returns: `Vec<usize>` The rank of each node.
    pub(crate) fn layer(&self) -> Vec<usize> {
        let mut in_degree = self.in_degree.clone();
        let mut ranks = vec![0; in_degree.len()];
        let mut queue: VecDeque<usize> = in_degree
            .iter()
            .enumerate()
            .filter_map(|(i, d)| if *d == 0 { Some(i) } else { None })
            .collect();

        while let Some(p) = queue.pop_front() {
            for q in self.edges[p].iter() {
                in_degree[*q] -= 1;
                if in_degree[*q] == 0 {
                    ranks[*q] = ranks[p] + 1;
                    queue.push_back(*q);
                }
            }
        }
        ranks
    }
}

/// Non-dominated sorting (with complexity $O(M * N^2)$, where `M` is the number of objectives
/// and `N` the number of individuals).
///
/// This sorts solutions into fronts. All pairs of individuals are compared with `operator` to
/// build the dominance graph, which is then layered breadth-first: individuals not dominated by
/// any other belong to the first front (rank `0`); an individual belongs to front `r + 1` when
/// the last individual dominating it is in front `r`. The rank therefore equals the length of the
/// longest chain of individuals dominating it.
///
/// Adapted from paragraph 3A in:
/// > K. Deb, A. Pratap, S. Agarwal and T. Meyarivan, "A fast and elitist multi-objective genetic
/// > algorithm: NSGA-II," in IEEE Transactions on Evolutionary Computation, vol. 6, no. 2, pp.
/// > 182-197, April 2002, doi: 10.1109/4235.996017.
///
/// # Arguments
///
/// * `individuals`: The individuals to sort by dominance.
/// * `operator`: The operator assessing the dominance between two individuals.
///
/// returns: `Result<NonDominatedSortResults, NslsError>`.
pub fn fast_non_dominated_sort(
    individuals: &[Individual],
    operator: &dyn BinaryComparisonOperator,
) -> Result<NonDominatedSortResults, NslsError> {
    let graph = DominanceGraph::new(individuals, operator)?;
    let ranks = graph.layer();

    let number_of_fronts = ranks.iter().max().map_or(0, |r| r + 1);
    let mut front_indexes: Vec<Vec<usize>> = vec![Vec::new(); number_of_fronts];
    for (idx, rank) in ranks.iter().enumerate() {
        front_indexes[*rank].push(idx);
    }

    let fronts = front_indexes
        .iter()
        .enumerate()
        .map(|(rank, front)| {
            front
                .iter()
                .map(|idx| {
                    let mut individual = individuals[*idx].clone();
                    individual.set_rank(rank);
                    individual
                })
                .collect()
        })
        .collect();

    Ok(NonDominatedSortResults {
        fronts,
        front_indexes,
        ranks,
        domination_counter: graph.in_degree,
    })
}
