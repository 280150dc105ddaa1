//! Minimum-spacing placement oracle.

use super::types::FeasibilityOracle;

/// Feasibility oracle for minimum-gap placement questions: "can `count`
/// items be placed on these sorted positions so that every adjacent pair
/// is at least the candidate gap apart?"
///
/// Greedy first-fit placement is exact: always taking the leftmost
/// position that respects the gap never reduces the number of items that
/// fit.
///
/// Feasibility is monotone non-increasing in the gap (a larger required
/// gap only removes placements), so the largest workable gap is found
/// with [`BisectRunner::maximize`].
///
/// # Examples
///
/// ```
/// use u_bisect::bisect::{BisectRunner, SearchDomain};
/// use u_bisect::oracle::SpacingOracle;
///
/// // Three items on stalls [1,2,4,8,9]: best minimum gap is 3 (1,4,8).
/// let oracle = SpacingOracle::new(vec![1, 2, 4, 8, 9], 3);
/// let domain = SearchDomain::new(1i64, 8).unwrap();
/// let outcome = BisectRunner::maximize(domain, &oracle);
/// assert_eq!(outcome.feasible(), Some(3));
/// ```
///
/// [`BisectRunner::maximize`]: crate::bisect::BisectRunner::maximize
#[derive(Debug, Clone)]
pub struct SpacingOracle {
    positions: Vec<i64>,
    count: usize,
}

impl SpacingOracle {
    /// Creates an oracle over ascending `positions` for `count` items.
    pub fn new(positions: Vec<i64>, count: usize) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
        Self { positions, count }
    }

    /// How many items first-fit placement seats at the given `gap`.
    pub fn placeable(&self, gap: i64) -> usize {
        let mut placed = 0usize;
        let mut last: Option<i64> = None;
        for &pos in &self.positions {
            let fits = match last {
                None => true,
                // Overflowing distance exceeds any representable gap.
                Some(prev) => pos.checked_sub(prev).map_or(true, |d| d >= gap),
            };
            if fits {
                placed += 1;
                last = Some(pos);
            }
        }
        placed
    }
}

impl FeasibilityOracle<i64> for SpacingOracle {
    fn is_feasible(&self, gap: i64) -> bool {
        self.placeable(gap) >= self.count
    }
}
