//! Problem instance: cities and the travel-cost model.
//!
//! A [`Scenario`] is an ordered, indexable collection of [`City`] values
//! plus a [`CostModel`]. It is validated once at construction and treated
//! as read-only afterwards; every algorithm borrows it immutably, so a
//! single scenario can back any number of sequential solver runs.

use crate::error::SolverError;
use std::collections::HashSet;

/// Travel cost between two cities. [`UNREACHABLE`] marks a missing edge.
pub type Cost = f64;

/// Sentinel for a missing edge. Tour costs short-circuit to this value;
/// cost arithmetic never produces NaN.
pub const UNREACHABLE: Cost = f64::INFINITY;

/// A city with a stable, dense, 0-based index and planar coordinates.
///
/// The index is assigned once at scenario creation and is what tours and
/// search nodes store; coordinates exist for cost models that need them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

/// Directed travel cost between two city indices.
///
/// Implementations must be deterministic and side-effect free. Symmetry is
/// not required; a missing edge is reported as [`UNREACHABLE`].
pub trait CostModel: Send + Sync {
    fn travel_cost(&self, from: usize, to: usize) -> Cost;
}

/// Cost model backed by an explicit (possibly asymmetric) n×n matrix.
#[derive(Debug, Clone)]
pub struct MatrixCost {
    matrix: Vec<Vec<Cost>>,
}

impl MatrixCost {
    /// Wraps a square cost matrix. Rows are origins, columns destinations.
    pub fn new(matrix: Vec<Vec<Cost>>) -> Result<Self, SolverError> {
        let n = matrix.len();
        if matrix.iter().any(|row| row.len() != n) {
            return Err(SolverError::InvalidScenario(format!(
                "cost matrix must be square, expected {n} columns per row"
            )));
        }
        Ok(Self { matrix })
    }

    pub fn size(&self) -> usize {
        self.matrix.len()
    }
}

impl CostModel for MatrixCost {
    fn travel_cost(&self, from: usize, to: usize) -> Cost {
        self.matrix[from][to]
    }
}

/// Euclidean distances between city coordinates, with an optional set of
/// removed directed edges modeling partial reachability.
#[derive(Debug, Clone, Default)]
pub struct EuclideanCost {
    points: Vec<(f64, f64)>,
    removed: HashSet<(usize, usize)>,
}

impl EuclideanCost {
    pub fn new(cities: &[City]) -> Self {
        Self {
            points: cities.iter().map(|c| (c.x, c.y)).collect(),
            removed: HashSet::new(),
        }
    }

    /// Marks a directed edge as unreachable.
    pub fn remove_edge(&mut self, from: usize, to: usize) {
        self.removed.insert((from, to));
    }
}

impl CostModel for EuclideanCost {
    fn travel_cost(&self, from: usize, to: usize) -> Cost {
        if self.removed.contains(&(from, to)) {
            return UNREACHABLE;
        }
        let (x1, y1) = self.points[from];
        let (x2, y2) = self.points[to];
        ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
    }
}

/// An immutable TSP instance: cities plus their cost model.
pub struct Scenario {
    cities: Vec<City>,
    model: Box<dyn CostModel>,
}

impl Scenario {
    /// Builds a scenario, validating that at least one city exists and that
    /// city indices are dense and in order.
    pub fn new(cities: Vec<City>, model: Box<dyn CostModel>) -> Result<Self, SolverError> {
        if cities.is_empty() {
            return Err(SolverError::InvalidScenario(
                "scenario must contain at least one city".into(),
            ));
        }
        for (i, city) in cities.iter().enumerate() {
            if city.index != i {
                return Err(SolverError::InvalidScenario(format!(
                    "city at position {i} has index {}, expected dense 0-based indices",
                    city.index
                )));
            }
        }
        Ok(Self { cities, model })
    }

    /// Convenience constructor from an explicit cost matrix; cities are
    /// synthesized with zeroed coordinates.
    pub fn from_matrix(matrix: Vec<Vec<Cost>>) -> Result<Self, SolverError> {
        let model = MatrixCost::new(matrix)?;
        let cities = (0..model.size()).map(|i| City::new(i, 0.0, 0.0)).collect();
        Self::new(cities, Box::new(model))
    }

    /// Convenience constructor for Euclidean instances.
    pub fn euclidean(cities: Vec<City>) -> Result<Self, SolverError> {
        let model = EuclideanCost::new(&cities);
        Self::new(cities, Box::new(model))
    }

    /// Number of cities (always ≥ 1).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false; construction rejects empty city lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Directed travel cost between two city indices.
    pub fn cost(&self, from: usize, to: usize) -> Cost {
        self.model.travel_cost(from, to)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("cities", &self.cities.len())
            .finish()
    }
}
