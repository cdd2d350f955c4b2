// ============================================================================
// Operand Policy
// Configures which operands the rounding divisions validate
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects how strictly [`check_operands`](super::check_operands) validates
/// the operands of a rounding division.
///
/// Both policies reject a zero divisor and a NaN or infinite dividend. They
/// differ only in how the divisor is treated beyond the zero check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandPolicy {
    /// Only the dividend is checked for NaN / infinity.
    ///
    /// A NaN or infinite divisor passes validation. The quotient is then NaN
    /// or zero, and a NaN quotient converts to `0`.
    #[default]
    DividendOnly,

    /// The divisor is checked for NaN / infinity as well.
    Strict,
}

impl OperandPolicy {
    /// Whether the divisor is checked for NaN / infinity.
    #[inline]
    pub const fn validates_divisor(self) -> bool {
        matches!(self, OperandPolicy::Strict)
    }

    /// Short name for log output.
    pub const fn name(self) -> &'static str {
        match self {
            OperandPolicy::DividendOnly => "dividend-only",
            OperandPolicy::Strict => "strict",
        }
    }
}
