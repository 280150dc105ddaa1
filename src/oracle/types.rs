//! Core trait for feasibility oracles.

/// A monotonic feasibility predicate over an ordered candidate domain.
///
/// The user implements feasibility evaluation; the bisection driver
/// handles interval management, candidate tracking, and termination.
///
/// # Contract
///
/// For some threshold `t` in the candidate domain, either every
/// `candidate >= t` is feasible and every `candidate < t` is not
/// (minimize direction), or the mirror image holds (maximize direction).
/// Evaluation must be pure: same candidate, same verdict, no side
/// effects.
///
/// Any `Fn(T) -> bool` closure is an oracle, so ad-hoc predicates need no
/// wrapper type:
///
/// ```
/// use u_bisect::bisect::{BisectRunner, SearchDomain};
///
/// // Feasible from 42 upward; minimal feasible candidate is 42.
/// let domain = SearchDomain::new(0i64, 100).unwrap();
/// let outcome = BisectRunner::minimize(domain, &|c: i64| c >= 42);
/// assert_eq!(outcome.feasible(), Some(42));
/// ```
pub trait FeasibilityOracle<T> {
    /// Whether the constraint is satisfiable at `candidate`.
    fn is_feasible(&self, candidate: T) -> bool;
}

impl<T, F> FeasibilityOracle<T> for F
where
    F: Fn(T) -> bool,
{
    fn is_feasible(&self, candidate: T) -> bool {
        self(candidate)
    }
}
