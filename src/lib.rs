//! Monotonic-predicate search toolkit.
//!
//! Provides generic implementations of threshold search over monotonic
//! feasibility predicates:
//!
//! - **Answer-space bisection**: given an ordered candidate domain and a
//!   monotonic feasibility oracle, finds the minimal (or maximal) feasible
//!   candidate. Integer and continuous (epsilon-terminated) variants.
//! - **Dual-sequence partition search**: order statistics (k-th smallest,
//!   median) over two sorted sequences without merging them, in
//!   `O(log(min(n1, n2)))` comparisons.
//! - **Feasibility oracles**: the oracle contract plus reference oracles
//!   for capacity grouping and spacing placement — the user supplies a
//!   pure monotonic predicate; the drivers handle the search mechanics.
//! - **Numeric policy**: overflow-safe midpoints and comparisons, ceiling
//!   division, and tagged infinity boundary sentinels shared by the
//!   drivers.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts — capacity planning, scheduling,
//! placement, etc. are all defined by consumers at higher layers, which
//! plug in their own oracles and consume `SearchOutcome` values.
//!
//! Every entry point is a pure function of its explicit inputs: no shared
//! state, no I/O, no randomness. Independent searches may run on separate
//! threads without coordination.

pub mod bisect;
pub mod error;
pub mod numeric;
pub mod oracle;
pub mod partition;
