// ============================================================================
// Mathx Library
// Generic numeric operations over primitive integers and floats
// ============================================================================

//! # Mathx
//!
//! Small, pure numeric helpers that behave identically across every
//! primitive integer width (`i8`..`i128`, `isize`, `u8`..`u128`, `usize`)
//! and both IEEE-754 float types.
//!
//! ## Features
//!
//! - **`min` / `max`** with unconditional NaN propagation and `-0.0 < +0.0`
//! - **`dim`** (positive difference) using the type's native wraparound
//!   subtraction before clamping at zero
//! - **`div_ceil` / `div_round`** computed through `f64`, returning `isize`,
//!   and panicking on a zero divisor or a NaN / infinite dividend
//! - **`check_operands`** to validate division operands up front
//!
//! ## Example
//!
//! ```rust
//! use mathx::prelude::*;
//!
//! assert_eq!(min(3u8, 7), 3);
//! assert!(max(1.0f64, f64::NAN).is_nan());
//!
//! assert_eq!(dim(i8::MIN, i8::MAX), 1);
//! assert_eq!(dim(2.5f32, 4.0), 0.0);
//!
//! assert_eq!(div_ceil(-10, 3), -3);
//! assert_eq!(div_round(-5, 2), -3);
//!
//! // Validate first to avoid the panic
//! let dividend = f64::INFINITY;
//! assert_eq!(
//!     check_operands(dividend, 2.0, OperandPolicy::default()),
//!     Err(NumericError::InfiniteOperand)
//! );
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        check_operands, dim, div_ceil, div_ceil_with, div_round, div_round_with, max, min,
        Number, NumericError, NumericResult, OperandPolicy,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::thread;

    fn generic_spread<N: Number>(values: &[N]) -> N {
        let mut lo = values[0];
        let mut hi = values[0];
        for &v in &values[1..] {
            lo = min(lo, v);
            hi = max(hi, v);
        }
        dim(hi, lo)
    }

    #[test]
    fn test_operations_compose_generically() {
        assert_eq!(generic_spread(&[4i32, -2, 9, 0]), 11);
        assert_eq!(generic_spread(&[7u8, 3, 200]), 197);
        assert_eq!(generic_spread(&[1.5f64, -0.5, 3.0]), 3.5);
        assert!(generic_spread(&[1.0f32, f32::NAN, 3.0]).is_nan());
    }

    #[test]
    fn test_validate_then_divide() {
        let inputs = [(10i64, 3i64), (7, 0), (-9, 2)];
        let results: Vec<Option<isize>> = inputs
            .iter()
            .map(|&(x, y)| {
                check_operands(x, y, OperandPolicy::default())
                    .ok()
                    .map(|()| div_ceil(x, y))
            })
            .collect();
        assert_eq!(results, vec![Some(4), None, Some(-4)]);
    }

    #[test]
    fn test_panic_message_matches_error_display() {
        let payload = std::panic::catch_unwind(|| div_round(f64::NAN, 1.0)).unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap();
        assert_eq!(message, NumericError::NanOperand.to_string());
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let handles: Vec<_> = (1..=8i64)
            .map(|k| {
                thread::spawn(move || {
                    (0..1_000i64)
                        .map(|i| div_ceil(i * k, k) as i64 + dim(i, k))
                        .sum::<i64>()
                })
            })
            .collect();

        let expected = |k: i64| -> i64 { (0..1_000i64).map(|i| i + (i - k).max(0)).sum() };
        for (k, handle) in (1..=8i64).zip(handles) {
            assert_eq!(handle.join().unwrap(), expected(k));
        }
    }
}
