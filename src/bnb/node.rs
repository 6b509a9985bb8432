//! Search nodes and the reduced-cost matrix.

use crate::scenario::{Cost, Scenario, UNREACHABLE};
use std::cmp::Ordering;

/// Dense n×n cost matrix, flat row-major storage.
///
/// Entry `[i][j]` is the remaining cost to go from city `i` to city `j`;
/// [`UNREACHABLE`] marks edges excluded by the cost model or consumed by
/// the search.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    /// Snapshot of all pairwise costs of a scenario.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let n = scenario.len();
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(scenario.cost(i, j));
            }
        }
        Self { n, cells }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.cells[from * self.n + to]
    }

    #[inline]
    fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.cells[from * self.n + to] = cost;
    }

    /// Consumes the directed edge `from → to`: the departing row, the
    /// arriving column, and the reverse edge all become unreachable (the
    /// reverse edge would close a 2-cycle).
    pub fn exclude_edge(&mut self, from: usize, to: usize) {
        for j in 0..self.n {
            self.set(from, j, UNREACHABLE);
        }
        for i in 0..self.n {
            self.set(i, to, UNREACHABLE);
        }
        self.set(to, from, UNREACHABLE);
    }

    /// Full row-wise then column-wise reduction: subtracts each line's
    /// minimum finite value (skipping all-infinite lines) and returns the
    /// total amount subtracted, which is the lower-bound increase.
    ///
    /// The returned amount is always non-negative and never NaN.
    pub fn reduce(&mut self) -> Cost {
        let mut reduction = 0.0;
        for i in 0..self.n {
            let row_min = (0..self.n).map(|j| self.get(i, j)).fold(UNREACHABLE, f64::min);
            if row_min != UNREACHABLE {
                for j in 0..self.n {
                    let cell = self.get(i, j);
                    if cell != UNREACHABLE {
                        self.set(i, j, cell - row_min);
                    }
                }
                reduction += row_min;
            }
        }
        for j in 0..self.n {
            let col_min = (0..self.n).map(|i| self.get(i, j)).fold(UNREACHABLE, f64::min);
            if col_min != UNREACHABLE {
                for i in 0..self.n {
                    let cell = self.get(i, j);
                    if cell != UNREACHABLE {
                        self.set(i, j, cell - col_min);
                    }
                }
                reduction += col_min;
            }
        }
        reduction
    }
}

/// A partial tour in the search tree: its reduced-cost matrix, the path of
/// visited cities, and the accumulated lower bound.
///
/// Nodes are managed in a flat priority queue and discarded once expanded
/// or pruned; each node owns its matrix outright.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub matrix: CostMatrix,
    pub path: Vec<usize>,
    pub bound: Cost,
}

impl SearchNode {
    /// Root node for a scenario: full unreduced matrix, path `[0]`,
    /// bound 0. The first reduction happens on child derivation.
    pub fn root(scenario: &Scenario) -> Self {
        Self {
            matrix: CostMatrix::from_scenario(scenario),
            path: vec![0],
            bound: 0.0,
        }
    }

    /// Depth of the partial tour.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Last city on the partial path.
    pub fn current_city(&self) -> usize {
        *self.path.last().expect("search node path is never empty")
    }

    pub fn visits(&self, city: usize) -> bool {
        self.path.contains(&city)
    }

    /// Derives the child that extends this node by `next`: adds the direct
    /// edge cost, excludes the consumed row/column/reverse edge, then
    /// fully reduces the child matrix before the bound is finalized.
    pub fn child(&self, next: usize) -> Self {
        let from = self.current_city();
        let mut bound = self.bound + self.matrix.get(from, next);

        let mut matrix = self.matrix.clone();
        matrix.exclude_edge(from, next);
        bound += matrix.reduce();

        let mut path = self.path.clone();
        path.push(next);

        Self { matrix, path, bound }
    }
}

// Queue ordering: deeper partial tours first; within equal depth the lower
// bound wins. Depth-first bias is intentional (establishes a tight BSSF
// early) and must not be replaced by cost-first ordering.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth()
            .cmp(&other.depth())
            .then_with(|| other.bound.total_cmp(&self.bound))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
