// ============================================================================
// Basic Usage Example
// ============================================================================

use mathx::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Mathx Example ===\n");

    // Selection
    println!("Selection:");
    println!("  min(-128i8, 127)    = {}", min(-128i8, 127));
    println!("  max(u64::MAX, 100)  = {}", max(u64::MAX, 100));
    println!("  min(-0.0, 0.0)      = {:?}", min(-0.0f64, 0.0));
    println!("  max(-0.0, 0.0)      = {:?}", max(-0.0f64, 0.0));
    println!("  min(NaN, 1.0)       = {:?}", min(f64::NAN, 1.0));

    // Positive difference
    println!("\nPositive difference:");
    println!("  dim(5, 3)           = {}", dim(5, 3));
    println!("  dim(i8::MIN, i8::MAX) = {}", dim(i8::MIN, i8::MAX));
    println!("  dim(1u8, 2u8)       = {}", dim(1u8, 2u8));
    println!("  dim(+Inf, +Inf)     = {:?}", dim(f64::INFINITY, f64::INFINITY));

    // Rounding division
    println!("\nRounding division:");
    for (x, y) in [(10i64, 3i64), (-10, 3), (-10, -3), (5, 2), (-5, 2)] {
        println!(
            "  {x:>3} / {y:>2}: div_ceil = {:>2}, div_round = {:>2}",
            div_ceil(x, y),
            div_round(x, y)
        );
    }

    // Validation before dividing
    println!("\nValidation:");
    let candidates = [(1.0, 0.0), (f64::NAN, 2.0), (f64::INFINITY, 2.0), (1.0, f64::INFINITY)];
    for policy in [OperandPolicy::DividendOnly, OperandPolicy::Strict] {
        for (x, y) in candidates {
            match check_operands(x, y, policy) {
                Ok(()) => println!(
                    "  [{}] {x:?} / {y:?} -> div_ceil = {}",
                    policy.name(),
                    div_ceil_with(x, y, policy)
                ),
                Err(err) => println!("  [{}] {x:?} / {y:?} -> rejected: {err}", policy.name()),
            }
        }
    }

    println!("\n=== Example Complete ===");
}
