// ============================================================================
// Numeric Module
// Generic selection, positive difference and rounding division
// ============================================================================
//
// This module provides:
// - Number: capability trait implemented for every primitive integer and float
// - min / max: NaN-propagating selection with -0.0 < +0.0
// - dim: max(x - y, 0) with native wraparound subtraction
// - div_ceil / div_round: rounding division through f64 returning isize
// - check_operands / OperandPolicy: shared validation for the divisions
// - NumericError: validation failures (also the panic messages)
//
// Design principles:
// - Pure, stateless, allocation-free functions
// - Value-level degenerate results (NaN, wraparound) are never errors
// - Invalid division operands are fatal (panic), never a sentinel value

mod dim;
mod division;
mod errors;
mod number;
mod policy;
mod select;

pub use dim::dim;
pub use division::{check_operands, div_ceil, div_ceil_with, div_round, div_round_with};
pub use errors::{NumericError, NumericResult};
pub use number::Number;
pub use policy::OperandPolicy;
pub use select::{max, min};
