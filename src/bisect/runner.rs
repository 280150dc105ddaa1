//! Answer-space bisection loops.

use super::config::RealBisectConfig;
use super::domain::{RealDomain, SearchDomain};
use super::types::SearchOutcome;
use crate::numeric::midpoint;
use crate::oracle::FeasibilityOracle;
use num_traits::PrimInt;

/// Result of a continuous bisection run.
///
/// Carries run statistics alongside the outcome so callers can tell a
/// converged result from one stopped by the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealBisectResult {
    /// The search outcome. A feasible candidate was evaluated against the
    /// oracle; it is never an unchecked interval endpoint.
    pub outcome: SearchOutcome<f64>,

    /// Number of bisection steps performed.
    pub iterations: usize,

    /// Final interval width. Below `epsilon` unless the iteration cap
    /// stopped the run first.
    pub width: f64,
}

/// Executes answer-space bisection over a monotonic feasibility oracle.
///
/// One driver replaces the per-problem search loops: callers supply the
/// domain and the oracle, and pick the direction matching the oracle's
/// monotonicity. The result is always a candidate the oracle actually
/// accepted, tracked in an explicit variable — the loop's final `low` /
/// `high` values are never returned, since equating them with the answer
/// holds only when a feasible value is known to sit just outside the
/// interval, which not every call site can guarantee.
pub struct BisectRunner;

impl BisectRunner {
    /// Finds the minimal feasible candidate in the domain.
    ///
    /// The oracle must be monotone non-decreasing: feasible at some
    /// threshold and at everything above it. Runs `O(log(high - low))`
    /// oracle evaluations; the interval strictly narrows every step.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bisect::bisect::{BisectRunner, SearchDomain, SearchOutcome};
    ///
    /// let domain = SearchDomain::new(1i64, 100).unwrap();
    /// let outcome = BisectRunner::minimize(domain, &|c: i64| c * c >= 50);
    /// assert_eq!(outcome, SearchOutcome::Feasible(8));
    ///
    /// let none = BisectRunner::minimize(domain, &|_c: i64| false);
    /// assert_eq!(none, SearchOutcome::Infeasible);
    /// ```
    pub fn minimize<T, O>(domain: SearchDomain<T>, oracle: &O) -> SearchOutcome<T>
    where
        T: PrimInt,
        O: FeasibilityOracle<T> + ?Sized,
    {
        let mut low = domain.low();
        let mut high = domain.high();
        let mut best: Option<T> = None;

        loop {
            let mid = midpoint(low, high);
            if oracle.is_feasible(mid) {
                best = Some(mid);
                if mid == low {
                    break;
                }
                high = mid - T::one();
            } else {
                if mid == high {
                    break;
                }
                low = mid + T::one();
            }
        }

        match best {
            Some(candidate) => SearchOutcome::Feasible(candidate),
            None => SearchOutcome::Infeasible,
        }
    }

    /// Finds the maximal feasible candidate in the domain.
    ///
    /// Mirror of [`minimize`](Self::minimize) for oracles that are
    /// monotone non-increasing: feasible up to some threshold and
    /// infeasible above it.
    pub fn maximize<T, O>(domain: SearchDomain<T>, oracle: &O) -> SearchOutcome<T>
    where
        T: PrimInt,
        O: FeasibilityOracle<T> + ?Sized,
    {
        let mut low = domain.low();
        let mut high = domain.high();
        let mut best: Option<T> = None;

        loop {
            let mid = midpoint(low, high);
            if oracle.is_feasible(mid) {
                best = Some(mid);
                if mid == high {
                    break;
                }
                low = mid + T::one();
            } else {
                if mid == low {
                    break;
                }
                high = mid - T::one();
            }
        }

        match best {
            Some(candidate) => SearchOutcome::Feasible(candidate),
            None => SearchOutcome::Infeasible,
        }
    }

    /// Continuous counterpart of [`minimize`](Self::minimize).
    ///
    /// Bisects until the interval is narrower than `config.epsilon` or
    /// the iteration cap is hit, whichever comes first. The upper
    /// endpoint is evaluated up front: if it is infeasible the whole
    /// interval is (by monotonicity), and the run reports `Infeasible`
    /// without bisecting. Otherwise the loop maintains "the upper
    /// endpoint has been evaluated feasible" and returns that endpoint.
    pub fn minimize_real<O>(
        domain: RealDomain,
        oracle: &O,
        config: &RealBisectConfig,
    ) -> RealBisectResult
    where
        O: FeasibilityOracle<f64> + ?Sized,
    {
        config.validate().expect("invalid RealBisectConfig");

        let mut low = domain.low();
        let mut high = domain.high();

        if !oracle.is_feasible(high) {
            return RealBisectResult {
                outcome: SearchOutcome::Infeasible,
                iterations: 0,
                width: high - low,
            };
        }

        let mut iterations = 0usize;
        while high - low >= config.epsilon && iterations < config.max_iterations {
            let mid = low + (high - low) / 2.0;
            if oracle.is_feasible(mid) {
                high = mid;
            } else {
                low = mid;
            }
            iterations += 1;
        }

        RealBisectResult {
            outcome: SearchOutcome::Feasible(high),
            iterations,
            width: high - low,
        }
    }

    /// Continuous counterpart of [`maximize`](Self::maximize).
    ///
    /// Evaluates the lower endpoint up front and maintains "the lower
    /// endpoint has been evaluated feasible".
    pub fn maximize_real<O>(
        domain: RealDomain,
        oracle: &O,
        config: &RealBisectConfig,
    ) -> RealBisectResult
    where
        O: FeasibilityOracle<f64> + ?Sized,
    {
        config.validate().expect("invalid RealBisectConfig");

        let mut low = domain.low();
        let mut high = domain.high();

        if !oracle.is_feasible(low) {
            return RealBisectResult {
                outcome: SearchOutcome::Infeasible,
                iterations: 0,
                width: high - low,
            };
        }

        let mut iterations = 0usize;
        while high - low >= config.epsilon && iterations < config.max_iterations {
            let mid = low + (high - low) / 2.0;
            if oracle.is_feasible(mid) {
                low = mid;
            } else {
                high = mid;
            }
            iterations += 1;
        }

        RealBisectResult {
            outcome: SearchOutcome::Feasible(low),
            iterations,
            width: high - low,
        }
    }
}
