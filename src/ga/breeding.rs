//! Breeding operators on permutation routes.
//!
//! These operate on `&[usize]` index routes, independent of any scenario;
//! cost evaluation happens when the runner rebuilds a [`Tour`] from the
//! offspring route.
//!
//! [`Tour`]: crate::tour::Tour

use rand::Rng;

/// Slice crossover: a random contiguous slice `[start, end)` of parent 1
/// becomes the child's head; the tail is parent 2's cities in parent-2
/// order, skipping cities already in the head.
///
/// The slice may be empty, in which case the child is a copy of parent 2.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn slice_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = (a.min(b), a.max(b));

    let mut child = Vec::with_capacity(n);
    let mut in_head = vec![false; n];
    for &city in &parent1[start..end] {
        child.push(city);
        in_head[city] = true;
    }
    for &city in parent2 {
        if !in_head[city] {
            child.push(city);
        }
    }
    child
}

/// Swap mutation: exchanges two random positions (which may coincide,
/// yielding an unchanged route).
pub fn swap_mutation<R: Rng>(route: &mut [usize], rng: &mut R) {
    let n = route.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    route.swap(i, j);
}

/// Draws two distinct parent indices from a cost-sorted population.
///
/// With probability `choose_any_chance` both candidates come from the full
/// population; otherwise from the first `pool` entries (the elite pool).
/// Retries up to `retry_cap` times; returns `None` on exhaustion, which a
/// single-member population is guaranteed to hit — callers must handle the
/// signal rather than pair an individual with itself.
pub fn pick_distinct_parents<R: Rng>(
    population_len: usize,
    pool: usize,
    choose_any_chance: f64,
    retry_cap: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if population_len < 2 {
        return None;
    }
    let pool = pool.clamp(1, population_len);

    for _ in 0..retry_cap {
        let limit = if rng.random_range(0.0..1.0) < choose_any_chance {
            population_len
        } else {
            pool
        };
        let first = rng.random_range(0..limit);
        let second = rng.random_range(0..limit);
        if first != second {
            return Some((first, second));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn is_valid_permutation(route: &[usize], n: usize) -> bool {
        route.len() == n
            && route.iter().all(|&v| v < n)
            && route.iter().copied().collect::<HashSet<_>>().len() == n
    }

    #[test]
    fn test_crossover_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..10).collect();
        let p2: Vec<usize> = (0..10).rev().collect();
        for _ in 0..200 {
            let child = slice_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 10), "invalid child: {child:?}");
        }
    }

    #[test]
    fn test_crossover_single_element() {
        let mut rng = create_rng(42);
        let child = slice_crossover(&[0], &[0], &mut rng);
        assert_eq!(child, vec![0]);
    }

    /// True when `tail` is a subsequence of `reference` (order preserved).
    fn follows_order(tail: &[usize], reference: &[usize]) -> bool {
        let mut it = reference.iter();
        tail.iter().all(|&t| it.any(|&r| r == t))
    }

    #[test]
    fn test_crossover_structure() {
        // Some split exists where the head is a contiguous slice of
        // parent 1 and the tail follows parent 2's relative order.
        let mut rng = create_rng(42);
        let p1: Vec<usize> = vec![3, 1, 4, 0, 2];
        let p2: Vec<usize> = vec![2, 0, 1, 3, 4];
        for _ in 0..100 {
            let child = slice_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 5));
            let structured = (0..=5).any(|k| {
                let head_ok = k == 0 || p1.windows(k).any(|w| w == &child[..k]);
                head_ok && follows_order(&child[k..], &p2)
            });
            assert!(structured, "child violates crossover structure: {child:?}");
        }
    }

    #[test]
    fn test_swap_mutation_preserves_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let mut route: Vec<usize> = (0..12).collect();
            swap_mutation(&mut route, &mut rng);
            assert!(is_valid_permutation(&route, 12));
        }
    }

    #[test]
    fn test_swap_mutation_single_element_noop() {
        let mut rng = create_rng(42);
        let mut route = vec![0];
        swap_mutation(&mut route, &mut rng);
        assert_eq!(route, vec![0]);
    }

    #[test]
    fn test_parents_are_distinct_and_in_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (a, b) = pick_distinct_parents(50, 10, 0.01, 100, &mut rng)
                .expect("population of 50 must yield parents");
            assert_ne!(a, b);
            assert!(a < 50 && b < 50);
        }
    }

    #[test]
    fn test_parents_mostly_from_elite_pool() {
        let mut rng = create_rng(42);
        let mut outside_pool = 0usize;
        let draws = 2000;
        for _ in 0..draws {
            let (a, b) = pick_distinct_parents(100, 10, 0.01, 100, &mut rng).unwrap();
            if a >= 10 || b >= 10 {
                outside_pool += 1;
            }
        }
        // Only the 1% any-chance path can leave the pool.
        assert!(
            outside_pool < draws / 10,
            "expected rare out-of-pool draws, got {outside_pool}/{draws}"
        );
    }

    #[test]
    fn test_single_member_population_signals_exhaustion() {
        let mut rng = create_rng(42);
        assert_eq!(pick_distinct_parents(1, 1, 0.01, 1000, &mut rng), None);
    }

    #[test]
    fn test_pool_clamped_to_population() {
        let mut rng = create_rng(42);
        // Pool larger than the population must not index out of bounds.
        for _ in 0..500 {
            let (a, b) = pick_distinct_parents(3, 40, 0.0, 100, &mut rng).unwrap();
            assert!(a < 3 && b < 3);
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_is_permutation(
            seed in any::<u64>(),
            p1 in Just((0..8usize).collect::<Vec<_>>()).prop_shuffle(),
            p2 in Just((0..8usize).collect::<Vec<_>>()).prop_shuffle(),
        ) {
            let mut rng = create_rng(seed);
            let child = slice_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&child, 8));
        }
    }
}
