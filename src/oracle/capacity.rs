//! Capacity grouping oracle.

use super::types::FeasibilityOracle;

/// Feasibility oracle for consecutive-grouping capacity questions:
/// "can these weights be split, in order, into at most `max_groups`
/// groups whose sums never exceed the candidate capacity?"
///
/// This is the shape shared by shipment scheduling ("ship within D days"),
/// array splitting ("minimize the largest part sum"), and page allocation
/// problems. The greedy left-to-right packing is exact here: filling each
/// group as far as the capacity allows never increases the group count.
///
/// A new group opens only on strict overflow — a weight that lands
/// exactly on the capacity stays in the current group. A single weight
/// larger than the candidate capacity makes the candidate infeasible at
/// any group count.
///
/// Feasibility is monotone non-decreasing in the capacity, so the minimal
/// workable capacity is found with [`BisectRunner::minimize`].
///
/// # Examples
///
/// ```
/// use u_bisect::bisect::{BisectRunner, SearchDomain};
/// use u_bisect::oracle::GroupCapacityOracle;
///
/// // Split [7,2,5,10,8] into 2 consecutive groups, minimizing the
/// // largest group sum: [7,2,5 | 10,8] -> 18.
/// let oracle = GroupCapacityOracle::new(vec![7, 2, 5, 10, 8], 2);
/// let domain = SearchDomain::new(1i64, 32).unwrap();
/// let outcome = BisectRunner::minimize(domain, &oracle);
/// assert_eq!(outcome.feasible(), Some(18));
/// ```
///
/// [`BisectRunner::minimize`]: crate::bisect::BisectRunner::minimize
#[derive(Debug, Clone)]
pub struct GroupCapacityOracle {
    weights: Vec<i64>,
    max_groups: usize,
}

impl GroupCapacityOracle {
    /// Creates an oracle over non-negative `weights` with a group budget.
    pub fn new(weights: Vec<i64>, max_groups: usize) -> Self {
        debug_assert!(weights.iter().all(|&w| w >= 0));
        Self {
            weights,
            max_groups,
        }
    }

    /// Number of groups the greedy packing needs at `capacity`, or `None`
    /// when some single weight exceeds the capacity outright.
    pub fn groups_needed(&self, capacity: i64) -> Option<usize> {
        if self.weights.is_empty() {
            return Some(0);
        }

        let mut groups = 1usize;
        let mut running = 0i64;
        for &w in &self.weights {
            if w > capacity {
                return None;
            }
            match running.checked_add(w) {
                Some(next) if next <= capacity => running = next,
                // Strict overflow (arithmetic or over-capacity): new group.
                _ => {
                    groups += 1;
                    running = w;
                }
            }
        }
        Some(groups)
    }
}

impl FeasibilityOracle<i64> for GroupCapacityOracle {
    fn is_feasible(&self, capacity: i64) -> bool {
        self.groups_needed(capacity)
            .is_some_and(|groups| groups <= self.max_groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_groups_needed_basic() {
        let oracle = GroupCapacityOracle::new(vec![1, 2, 3, 4, 5], 10);
        assert_eq!(oracle.groups_needed(5), Some(4)); // [1,2] [3] [4] [5]
        assert_eq!(oracle.groups_needed(6), Some(3)); // [1,2,3] [4] [5]
        assert_eq!(oracle.groups_needed(15), Some(1));
        assert_eq!(oracle.groups_needed(4), None); // 5 alone never fits
    }

    #[test]
    fn test_exact_fit_stays_in_group() {
        // Running total landing exactly on the capacity must not split.
        let oracle = GroupCapacityOracle::new(vec![3, 3, 3], 10);
        assert_eq!(oracle.groups_needed(6), Some(2)); // [3,3] [3]
        assert_eq!(oracle.groups_needed(9), Some(1)); // [3,3,3]
    }

    #[test]
    fn test_empty_weights_need_no_groups() {
        let oracle = GroupCapacityOracle::new(vec![], 1);
        assert_eq!(oracle.groups_needed(1), Some(0));
        assert!(oracle.is_feasible(1));
    }

    #[test]
    fn test_feasibility_threshold() {
        let oracle = GroupCapacityOracle::new(vec![7, 2, 5, 10, 8], 2);
        assert!(!oracle.is_feasible(17));
        assert!(oracle.is_feasible(18));
        assert!(oracle.is_feasible(100));
    }

    #[test]
    fn test_running_sum_overflow_opens_group() {
        let big = i64::MAX - 1;
        let oracle = GroupCapacityOracle::new(vec![big, big, big], 3);
        // Each weight fits alone at capacity MAX; the running total would
        // overflow, which must read as "over capacity", not wrap.
        assert_eq!(oracle.groups_needed(i64::MAX), Some(3));
        assert!(oracle.is_feasible(i64::MAX));
    }

    proptest! {
        #[test]
        fn prop_feasibility_is_monotone(
            weights in prop::collection::vec(0i64..1_000, 0..40),
            max_groups in 1usize..8,
            a in 1i64..2_000,
            b in 1i64..2_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let oracle = GroupCapacityOracle::new(weights, max_groups);
            // Feasible at a capacity implies feasible at any larger one.
            prop_assert!(!oracle.is_feasible(lo) || oracle.is_feasible(hi));
        }

        #[test]
        fn prop_groups_needed_non_increasing(
            weights in prop::collection::vec(0i64..1_000, 1..40),
            a in 1i64..2_000,
            b in 1i64..2_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let oracle = GroupCapacityOracle::new(weights, 1);
            if let (Some(at_lo), Some(at_hi)) =
                (oracle.groups_needed(lo), oracle.groups_needed(hi))
            {
                prop_assert!(at_hi <= at_lo);
            }
        }
    }
}
