//! Dual-sequence partition search.
//!
//! Order statistics (k-th smallest, median) over two sorted sequences
//! without materializing their merge. The driver binary-searches how many
//! elements of the smaller sequence fall left of the target rank, so the
//! cost is `O(log(min(n1, n2)))` comparisons — bounded by
//! `ceil(log2(min(n1, n2))) + 1` probes — regardless of how large the
//! other sequence is.
//!
//! Sortedness of the inputs is a precondition, checked only by debug
//! assertions; rank bounds are validated and surface as
//! [`SearchError::InvalidInput`](crate::error::SearchError).

mod runner;
mod types;

pub use runner::PartitionRunner;
pub use types::PartitionState;
