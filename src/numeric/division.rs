// ============================================================================
// Rounding Division
// Ceiling and half-away-from-zero division through f64
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::number::Number;
use super::policy::OperandPolicy;

/// Validates the operands of a rounding division.
///
/// Checks run in this order:
/// 1. `y == 0` (including `-0.0`) -> [`NumericError::DivisionByZero`]
/// 2. `x` is NaN -> [`NumericError::NanOperand`]
/// 3. `x` is ±Inf -> [`NumericError::InfiniteOperand`]
/// 4. under [`OperandPolicy::Strict`] only, the same NaN / Inf checks on `y`
///
/// Integer operands can never be NaN or infinite, so for integer types only
/// the zero-divisor check can fail.
///
/// # Errors
/// Returns the first failed check as a [`NumericError`].
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::{check_operands, NumericError, OperandPolicy};
///
/// assert_eq!(check_operands(10, 3, OperandPolicy::default()), Ok(()));
/// assert_eq!(
///     check_operands(10, 0, OperandPolicy::default()),
///     Err(NumericError::DivisionByZero)
/// );
/// assert_eq!(
///     check_operands(f64::NAN, 1.0, OperandPolicy::default()),
///     Err(NumericError::NanOperand)
/// );
/// // The divisor is only checked for NaN / Inf when asked to
/// assert_eq!(check_operands(1.0, f64::INFINITY, OperandPolicy::DividendOnly), Ok(()));
/// assert_eq!(
///     check_operands(1.0, f64::INFINITY, OperandPolicy::Strict),
///     Err(NumericError::InfiniteOperand)
/// );
/// ```
pub fn check_operands<N: Number>(x: N, y: N, policy: OperandPolicy) -> NumericResult<()> {
    let result = validate(x, y, policy);
    if let Err(err) = result {
        tracing::trace!(policy = policy.name(), ?x, ?y, %err, "division operands rejected");
    }
    result
}

#[inline]
fn validate<N: Number>(x: N, y: N, policy: OperandPolicy) -> NumericResult<()> {
    if y == N::ZERO {
        return Err(NumericError::DivisionByZero);
    }
    check_finite(x)?;
    if policy.validates_divisor() {
        check_finite(y)?;
    }
    Ok(())
}

#[inline]
fn check_finite<N: Number>(v: N) -> NumericResult<()> {
    if v.is_nan_val() {
        Err(NumericError::NanOperand)
    } else if v.is_infinite_val() {
        Err(NumericError::InfiniteOperand)
    } else {
        Ok(())
    }
}

/// Panics with the validation error's message if the operands are rejected.
#[track_caller]
fn ensure_operands<N: Number>(operation: &'static str, x: N, y: N, policy: OperandPolicy) {
    if let Err(err) = check_operands(x, y, policy) {
        tracing::error!(operation, ?x, ?y, %err, "invalid division operands");
        panic!("{err}");
    }
}

/// Returns the least integer greater than or equal to `x / y`.
///
/// Both operands are widened to `f64` before dividing, so quotients beyond
/// 2^53 carry double-precision rounding. Results outside the `isize` range
/// saturate.
///
/// # Panics
///
/// ```text
/// y == 0          "division by zero"
/// x is NaN        "operand cannot be NaN"
/// x is ±Inf       "operand cannot be Inf"
/// ```
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::div_ceil;
///
/// assert_eq!(div_ceil(10, 3), 4);
/// assert_eq!(div_ceil(-10, 3), -3);
/// assert_eq!(div_ceil(-10, -3), 4);
/// assert_eq!(div_ceil(7.5f32, 2.0), 4);
/// ```
#[inline]
#[track_caller]
pub fn div_ceil<N: Number>(x: N, y: N) -> isize {
    div_ceil_with(x, y, OperandPolicy::default())
}

/// [`div_ceil`] with an explicit [`OperandPolicy`].
///
/// # Panics
/// Panics with the message of the [`NumericError`] that
/// [`check_operands`] reports under `policy`.
#[inline]
#[track_caller]
pub fn div_ceil_with<N: Number>(x: N, y: N, policy: OperandPolicy) -> isize {
    ensure_operands("div_ceil", x, y, policy);
    (x.as_f64() / y.as_f64()).ceil() as isize
}

/// Returns the integer nearest to `x / y`, rounding half away from zero.
///
/// Uses the same `f64` computation path and saturation as [`div_ceil`].
///
/// # Panics
///
/// ```text
/// y == 0          "division by zero"
/// x is NaN        "operand cannot be NaN"
/// x is ±Inf       "operand cannot be Inf"
/// ```
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::div_round;
///
/// assert_eq!(div_round(5, 2), 3);
/// assert_eq!(div_round(-5, 2), -3);
/// assert_eq!(div_round(10, 3), 3);
/// ```
#[inline]
#[track_caller]
pub fn div_round<N: Number>(x: N, y: N) -> isize {
    div_round_with(x, y, OperandPolicy::default())
}

/// [`div_round`] with an explicit [`OperandPolicy`].
///
/// # Panics
/// Panics with the message of the [`NumericError`] that
/// [`check_operands`] reports under `policy`.
#[inline]
#[track_caller]
pub fn div_round_with<N: Number>(x: N, y: N, policy: OperandPolicy) -> isize {
    ensure_operands("div_round", x, y, policy);
    (x.as_f64() / y.as_f64()).round() as isize
}
