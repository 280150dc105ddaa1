//! Numeric edge-case policy shared by the search drivers.
//!
//! Binary search code fails at the extremes long before it fails in the
//! middle: midpoints that overflow, ceiling divisions that wrap, boundary
//! sentinels that collide with legitimate extreme inputs. This module
//! centralizes those decisions so the drivers never reimplement them:
//!
//! - [`Bound`]: a tagged "no boundary" sentinel ordered below/above every
//!   finite value, instead of `MIN`/`MAX` magic numbers.
//! - [`midpoint`]: floor midpoint that never materializes `hi - lo`.
//! - [`div_ceil`]: ceiling division that never materializes `a + b - 1`.
//! - [`product_exceeds`]: `a * b > limit` without computing an
//!   overflowing product.

mod arith;
mod bound;

pub use arith::{div_ceil, midpoint, product_exceeds};
pub use bound::Bound;
