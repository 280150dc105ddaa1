//! Error type shared by the search drivers.

use std::fmt;

/// A malformed call that the drivers reject up front.
///
/// Note the distinction from [`SearchOutcome::Infeasible`]: an inverted
/// interval or an out-of-range rank is a caller mistake and comes back as
/// `Err(SearchError::InvalidInput)`, while a well-formed search that no
/// candidate satisfies is a legitimate result and comes back as
/// `Ok(Infeasible)`. The two are never conflated, and neither is encoded
/// as a numeric sentinel.
///
/// [`SearchOutcome::Infeasible`]: crate::bisect::SearchOutcome::Infeasible
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The call itself was malformed (inverted interval, rank outside
    /// `[1, n1 + n2]`, empty input where a value is required).
    InvalidInput(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
