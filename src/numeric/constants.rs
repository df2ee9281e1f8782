// ============================================================================
// Numeric Constants
// Process-wide immutable decimal values
// ============================================================================

use super::decimal_value::DecimalValue;
use num_bigint::BigInt;
use std::sync::LazyLock;

/// Largest magnitude reached by unbounded searches: `u64::MAX`.
pub static MAX_MAGNITUDE: LazyLock<DecimalValue> =
    LazyLock::new(|| DecimalValue::from_parts(BigInt::from(u64::MAX), 0));

/// Negated [`MAX_MAGNITUDE`].
pub static MIN_MAGNITUDE: LazyLock<DecimalValue> = LazyLock::new(|| -&*MAX_MAGNITUDE);

/// Ten, the base of every power-of-ten step.
pub static TEN: LazyLock<DecimalValue> = LazyLock::new(|| DecimalValue::from_integer(10));

/// One half (`0.5`), used to take midpoints.
pub static HALF: LazyLock<DecimalValue> = LazyLock::new(|| DecimalValue::from_scaled(5, 1));

/// One tenth (`0.1`), the first step of an unbounded search.
pub static ONE_TENTH: LazyLock<DecimalValue> = LazyLock::new(|| DecimalValue::from_scaled(1, 1));
