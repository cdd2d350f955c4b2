// ============================================================================
// Number Capability Trait
// The operations the generic numeric functions need from a primitive type
// ============================================================================

use std::fmt::Debug;

/// A primitive integer or IEEE-754 float usable with the generic operations
/// in this module.
///
/// Every method is by value and mirrors the type's native behavior:
/// subtraction wraps for integers and follows IEEE rules for floats, and the
/// NaN / infinity / signed-zero predicates are constant `false` for integers.
///
/// # Examples
///
/// ```rust
/// use mathx::numeric::Number;
///
/// assert_eq!(i8::MIN.wrapping_sub_val(i8::MAX), 1);
/// assert_eq!(3u16.as_f64(), 3.0);
/// assert!(f32::NAN.is_nan_val());
/// assert!((-0.0f64).is_negative_zero());
/// assert!(!0i32.is_negative_zero());
/// ```
pub trait Number: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The additive identity (`+0.0` for floats).
    const ZERO: Self;

    /// Subtraction with the type's native overflow behavior: modular for
    /// integers, IEEE-754 for floats.
    fn wrapping_sub_val(self, rhs: Self) -> Self;

    /// Widens the value to `f64`, rounding to nearest when the value has more
    /// significant bits than a double can hold.
    fn as_f64(self) -> f64;

    /// Returns `true` if the value is NaN.
    #[inline(always)]
    fn is_nan_val(self) -> bool {
        false
    }

    /// Returns `true` if the value is positive or negative infinity.
    #[inline(always)]
    fn is_infinite_val(self) -> bool {
        false
    }

    /// Returns `true` only for a floating-point `-0.0`.
    #[inline(always)]
    fn is_negative_zero(self) -> bool {
        false
    }
}

macro_rules! impl_number_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_sub_val(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_number_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn wrapping_sub_val(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline(always)]
                fn is_nan_val(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline(always)]
                fn is_infinite_val(self) -> bool {
                    <$t>::is_infinite(self)
                }

                #[inline(always)]
                fn is_negative_zero(self) -> bool {
                    self == 0.0 && <$t>::is_sign_negative(self)
                }
            }
        )*
    };
}

impl_number_for_int!(i8, i16, i32, i64, i128, isize);
impl_number_for_int!(u8, u16, u32, u64, u128, usize);
impl_number_for_float!(f32, f64);
