// ============================================================================
// Numeric Errors
// Operand validation failures for the rounding division operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a pair of division operands is rejected.
///
/// The `Display` text of each variant is also the panic message raised by
/// [`div_ceil`](super::div_ceil) and [`div_round`](super::div_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// The divisor compares equal to zero (`-0.0` included)
    DivisionByZero,
    /// An operand widened to `f64` is NaN
    NanOperand,
    /// An operand widened to `f64` is positive or negative infinity
    InfiniteOperand,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NanOperand => write!(f, "operand cannot be NaN"),
            NumericError::InfiniteOperand => write!(f, "operand cannot be Inf"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for operand validation
pub type NumericResult<T> = Result<T, NumericError>;
