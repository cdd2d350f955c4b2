// ============================================================================
// Positive Difference
// max(x - y, 0) using the type's native subtraction
// ============================================================================

use super::number::Number;

/// Returns `x - y` if it is positive, otherwise zero.
///
/// The subtraction is the type's native one: integers wrap around modulo
/// `2^width` *before* the clamp is applied, and floats follow IEEE-754. A NaN
/// difference compares unordered with zero and is returned as is.
///
/// Special cases:
///
/// ```text
/// dim(MAX, negative)   = 0          (wrapped result is <= 0)
/// dim(i8::MIN, i8::MAX) = 1          (-128 - 127 wraps to 1)
/// dim(1u8, 2u8)        = u8::MAX    (unsigned subtraction wraps)
/// dim(+Inf, +Inf)      = NaN
/// dim(-Inf, -Inf)      = NaN
/// dim(x, NaN)          = dim(NaN, x) = NaN
/// dim(-0.0, 0.0)       = +0.0
/// ```
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::dim;
///
/// assert_eq!(dim(5, 3), 2);
/// assert_eq!(dim(-5, -3), 0);
/// assert_eq!(dim(i8::MIN, i8::MAX), 1);
/// assert_eq!(dim(u32::MAX, 1), 4_294_967_294);
/// assert!(dim(f64::INFINITY, f64::INFINITY).is_nan());
/// ```
#[inline]
pub fn dim<N: Number>(x: N, y: N) -> N {
    let v = x.wrapping_sub_val(y);
    if v <= N::ZERO {
        return N::ZERO;
    }
    // positive or NaN
    v
}
