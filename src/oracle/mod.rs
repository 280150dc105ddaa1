//! Feasibility oracle contract and reference oracles.
//!
//! An oracle answers one question: "is this candidate value feasible?".
//! The bisection driver does the rest, so the contract is deliberately
//! small:
//!
//! - **Pure**: no side effects, evaluable per candidate in isolation.
//! - **Monotonic**: feasibility changes at most once across the ordered
//!   candidate domain. Which side is feasible determines the direction
//!   ([`BisectRunner::minimize`] for oracles feasible from some threshold
//!   upward, [`BisectRunner::maximize`] for oracles feasible up to a
//!   threshold).
//!
//! A non-monotonic oracle is a caller bug. It is not detectable at
//! runtime without evaluating the whole domain, so it is caught by
//! randomized tests (each reference oracle here ships one), not by the
//! driver.
//!
//! Reference oracles in this module are greedy `O(n)` simulations:
//! [`GroupCapacityOracle`] for consecutive-grouping capacity questions and
//! [`SpacingOracle`] for minimum-gap placement questions. Both apply one
//! uniform boundary convention: a running total only opens a new group on
//! strict overflow, so an exact-capacity fit stays in the current group.
//!
//! [`BisectRunner::minimize`]: crate::bisect::BisectRunner::minimize
//! [`BisectRunner::maximize`]: crate::bisect::BisectRunner::maximize

mod capacity;
mod spacing;
mod types;

pub use capacity::GroupCapacityOracle;
pub use spacing::SpacingOracle;
pub use types::FeasibilityOracle;
