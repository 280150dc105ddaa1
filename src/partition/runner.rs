//! Rank and median search over two sorted sequences.

use super::types::PartitionState;
use crate::error::SearchError;
use crate::numeric::div_ceil;

/// Executes partition search over two sorted slices.
pub struct PartitionRunner;

impl PartitionRunner {
    /// Element of rank `k` (1-indexed) in the conceptual merge of `a`
    /// and `b`.
    ///
    /// Both slices must be sorted ascending (debug-asserted, not checked
    /// in release builds). `k` outside `[1, a.len() + b.len()]` is
    /// rejected as [`SearchError::InvalidInput`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bisect::partition::PartitionRunner;
    ///
    /// let kth = PartitionRunner::kth(&[2, 3, 6, 7, 9], &[1, 4, 8, 10], 5).unwrap();
    /// assert_eq!(kth, 6);
    /// ```
    pub fn kth<T: Ord + Copy>(a: &[T], b: &[T], k: usize) -> Result<T, SearchError> {
        let total = a.len() + b.len();
        if k == 0 || k > total {
            return Err(SearchError::InvalidInput(format!(
                "rank {k} outside [1, {total}]"
            )));
        }

        let state = Self::partition_at_rank(a, b, k);
        Ok(state
            .max_left()
            .finite()
            .expect("rank >= 1 puts at least one element left of the cut"))
    }

    /// Median of the conceptual merge of `a` and `b`.
    ///
    /// For an odd total length this is the middle element; for an even
    /// total it is the mean of the two middle elements, summed in `i128`
    /// so extreme `i64` values cannot overflow before the division.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bisect::partition::PartitionRunner;
    ///
    /// assert_eq!(PartitionRunner::median(&[1, 3], &[2]).unwrap(), 2.0);
    /// assert_eq!(PartitionRunner::median(&[1, 2], &[3, 4]).unwrap(), 2.5);
    /// ```
    pub fn median(a: &[i64], b: &[i64]) -> Result<f64, SearchError> {
        let total = a.len() + b.len();
        if total == 0 {
            return Err(SearchError::InvalidInput(
                "median of two empty sequences".into(),
            ));
        }

        // Left region of ceil(total / 2) elements; its maximum is the
        // lower middle element.
        let k = div_ceil(total, 2);
        let state = Self::partition_at_rank(a, b, k);
        let lower = state
            .max_left()
            .finite()
            .expect("rank >= 1 puts at least one element left of the cut");

        if total % 2 == 1 {
            return Ok(lower as f64);
        }

        let upper = state
            .min_right()
            .finite()
            .expect("even total leaves the right region non-empty");
        Ok((lower as i128 + upper as i128) as f64 / 2.0)
    }

    /// Finds the valid split placing `k` elements left of the cut.
    ///
    /// Binary search over how many of those `k` come from the smaller
    /// slice; the count from the larger slice follows. A too-large count
    /// shows up as the smaller slice's left maximum exceeding the larger
    /// slice's right minimum, and vice versa.
    fn partition_at_rank<T: Ord + Copy>(a: &[T], b: &[T], k: usize) -> PartitionState<T> {
        debug_assert!(a.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(b.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(k >= 1 && k <= a.len() + b.len());

        let (small, large, swapped) = if a.len() <= b.len() {
            (a, b, false)
        } else {
            (b, a, true)
        };

        // Count taken from the smaller slice; both bounds keep the
        // larger slice's share j = k - i within [0, large.len()].
        let mut low = k.saturating_sub(large.len());
        let mut high = k.min(small.len());

        loop {
            let i = low + (high - low) / 2;
            let j = k - i;
            let state = PartitionState::at(small, large, i, j);

            if state.is_valid() {
                return if swapped {
                    state.swap_sequences()
                } else {
                    state
                };
            }

            if state.max_left_a > state.min_right_b {
                // i is too large; max_left_a is finite, so i >= 1.
                high = i - 1;
            } else {
                low = i + 1;
            }
        }
    }
}
