//! Overflow-safe arithmetic helpers.

use num_traits::PrimInt;

/// Floor midpoint of `lo` and `hi` without computing `hi - lo`.
///
/// The textbook `lo + (hi - lo) / 2` already avoids the classic
/// `(lo + hi) / 2` overflow, but the difference itself can still wrap for
/// signed types when the interval spans more than half the type's range
/// (e.g. `[i64::MIN, i64::MAX]`). The carry-free form
/// `(lo & hi) + ((lo ^ hi) >> 1)` is total: the shared bits contribute
/// fully, the differing bits contribute half, and the arithmetic shift
/// keeps the sign.
///
/// # Examples
///
/// ```
/// use u_bisect::numeric::midpoint;
///
/// assert_eq!(midpoint(2i64, 8), 5);
/// assert_eq!(midpoint(-3i64, 0), -2); // floor(-1.5)
/// assert_eq!(midpoint(i64::MIN, i64::MAX), -1);
/// ```
pub fn midpoint<T: PrimInt>(lo: T, hi: T) -> T {
    (lo & hi) + ((lo ^ hi) >> 1)
}

/// Ceiling division of a non-negative `a` by a positive `b`.
///
/// Computed as `a / b` plus a remainder correction rather than
/// `(a + b - 1) / b`, so `a` near the top of the type's range cannot
/// overflow the numerator.
///
/// # Examples
///
/// ```
/// use u_bisect::numeric::div_ceil;
///
/// assert_eq!(div_ceil(7i64, 2), 4);
/// assert_eq!(div_ceil(8i64, 2), 4);
/// assert_eq!(div_ceil(i64::MAX, 2), (i64::MAX / 2) + 1);
/// ```
pub fn div_ceil<T: PrimInt>(a: T, b: T) -> T {
    debug_assert!(a >= T::zero() && b > T::zero());
    let q = a / b;
    if a % b != T::zero() {
        q + T::one()
    } else {
        q
    }
}

/// Whether `a * b > limit`, for non-negative `a` and `b`, without ever
/// computing an overflowing product.
///
/// A product that overflows the type necessarily exceeds any
/// representable limit, so overflow maps to `true`. This is the
/// restructured comparison used where candidate-squared or
/// candidate-times-count checks would otherwise need a wider type.
///
/// # Examples
///
/// ```
/// use u_bisect::numeric::product_exceeds;
///
/// assert!(!product_exceeds(3i64, 4, 12));
/// assert!(product_exceeds(3i64, 4, 11));
/// assert!(product_exceeds(i64::MAX, 2, i64::MAX)); // would overflow
/// ```
pub fn product_exceeds<T: PrimInt>(a: T, b: T, limit: T) -> bool {
    debug_assert!(a >= T::zero() && b >= T::zero());
    match a.checked_mul(&b) {
        Some(product) => product > limit,
        None => true,
    }
}
