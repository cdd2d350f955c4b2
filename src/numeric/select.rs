// ============================================================================
// Min / Max Selection
// Pairwise selection with NaN propagation and signed-zero ordering
// ============================================================================

use super::number::Number;

/// Returns the smaller of `x` and `y`.
///
/// If either argument is NaN the result is NaN (`x` is checked first).
/// `-0.0` is treated as smaller than `+0.0`; any other tie returns `x`.
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::min;
///
/// assert_eq!(min(-128i8, 127), -128);
/// assert_eq!(min(u64::MAX, 100), 100);
/// assert!(min(f64::NAN, 1.0).is_nan());
/// assert!(min(-0.0f64, 0.0).is_sign_negative());
/// ```
#[inline]
pub fn min<N: Number>(x: N, y: N) -> N {
    if x.is_nan_val() {
        return x;
    }
    if y.is_nan_val() {
        return y;
    }
    if x < y {
        x
    } else if y < x || y.is_negative_zero() {
        y
    } else {
        x
    }
}

/// Returns the larger of `x` and `y`.
///
/// If either argument is NaN the result is NaN (`x` is checked first).
/// `+0.0` is treated as larger than `-0.0`; any other tie returns `x`.
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::max;
///
/// assert_eq!(max(-128i8, 127), 127);
/// assert_eq!(max(0usize, usize::MAX), usize::MAX);
/// assert!(max(1.0f32, f32::NAN).is_nan());
/// assert!(max(-0.0f64, 0.0).is_sign_positive());
/// ```
#[inline]
pub fn max<N: Number>(x: N, y: N) -> N {
    if x.is_nan_val() {
        return x;
    }
    if y.is_nan_val() {
        return y;
    }
    if x > y {
        x
    } else if y > x || x.is_negative_zero() {
        y
    } else {
        x
    }
}
