//! Complete tours and their cyclic cost.

use crate::scenario::{Cost, Scenario, UNREACHABLE};

/// A Hamiltonian cycle: every city index exactly once, closing back to the
/// first entry. The cost is computed eagerly at construction and cached.
///
/// Two tours that are rotations of the same cycle compare as different
/// routes; only costs are ever compared between tours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    route: Vec<usize>,
    cost: Cost,
}

impl Tour {
    /// Builds a tour from an ordered route of city indices.
    ///
    /// The route is expected to be a permutation of `0..scenario.len()`;
    /// this is the caller's invariant (all constructors in this crate only
    /// ever produce permutations) and is checked in debug builds.
    pub fn new(scenario: &Scenario, route: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&route, scenario.len()));
        let cost = route_cost(scenario, &route);
        Self { route, cost }
    }

    /// City indices in visit order.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Total cyclic cost; [`UNREACHABLE`] if any hop has no edge.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Re-evaluates the cost from the stored route. Idempotent: always
    /// returns the value recorded at construction.
    pub fn recompute_cost(&self, scenario: &Scenario) -> Cost {
        route_cost(scenario, &self.route)
    }
}

/// Sum of consecutive hop costs plus the closing edge, short-circuiting to
/// [`UNREACHABLE`] on the first missing hop so no NaN can arise.
fn route_cost(scenario: &Scenario, route: &[usize]) -> Cost {
    let mut total = 0.0;
    for window in route.windows(2) {
        let hop = scenario.cost(window[0], window[1]);
        if hop == UNREACHABLE {
            return UNREACHABLE;
        }
        total += hop;
    }
    if route.len() > 1 {
        let closing = scenario.cost(route[route.len() - 1], route[0]);
        if closing == UNREACHABLE {
            return UNREACHABLE;
        }
        total += closing;
    }
    total
}

fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in route {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
