// ============================================================================
// Rounding Policy
// Closed set of rounding rules and the coefficient rounding kernel
// ============================================================================

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_integer::Integer;
use num_traits::Zero;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How discarded digits are resolved when a value is rounded.
///
/// The mode is always passed to the rounding call; a value never remembers
/// the mode it was last rounded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour (banker's rounding)
    #[default]
    NearestEven,
    /// Round to nearest, ties away from zero
    NearestAway,
    /// Truncate
    TowardZero,
    /// Any discarded fraction increases the magnitude
    AwayFromZero,
    /// Floor
    TowardNegativeInfinity,
    /// Ceiling
    TowardPositiveInfinity,
}

impl RoundingMode {
    /// All rounding modes, in declaration order.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::NearestEven,
        RoundingMode::NearestAway,
        RoundingMode::TowardZero,
        RoundingMode::AwayFromZero,
        RoundingMode::TowardNegativeInfinity,
        RoundingMode::TowardPositiveInfinity,
    ];

    /// Decides whether a truncated magnitude must be incremented.
    ///
    /// `half` compares the discarded part against one half unit in the last
    /// kept place, `inexact` tells whether anything non-zero was discarded.
    #[inline]
    fn increments(self, negative: bool, truncated_is_odd: bool, half: Ordering, inexact: bool) -> bool {
        match self {
            RoundingMode::NearestEven => {
                half == Ordering::Greater || (half == Ordering::Equal && truncated_is_odd)
            },
            RoundingMode::NearestAway => half != Ordering::Less,
            RoundingMode::TowardZero => false,
            RoundingMode::AwayFromZero => inexact,
            RoundingMode::TowardNegativeInfinity => inexact && negative,
            RoundingMode::TowardPositiveInfinity => inexact && !negative,
        }
    }
}

impl From<RoundingMode> for rust_decimal::RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        use rust_decimal::RoundingStrategy;

        match mode {
            RoundingMode::NearestEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::NearestAway => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::TowardZero => RoundingStrategy::ToZero,
            RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
            RoundingMode::TowardNegativeInfinity => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::TowardPositiveInfinity => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

// ============================================================================
// Coefficient Kernel
// ============================================================================

/// Computes 10^exp as an unsigned big integer.
pub(crate) fn pow10(exp: u64) -> BigUint {
    BigUint::from(10u32).pow(u32::try_from(exp).unwrap_or(u32::MAX))
}

/// Number of decimal digits in the magnitude of `n` (zero has one digit).
pub(crate) fn digit_count(n: &BigInt) -> u64 {
    n.magnitude().to_str_radix(10).len() as u64
}

/// Drops the `drop` least significant digits of `coefficient`, rounding the
/// remaining digits with `mode`.
///
/// `sticky` marks a non-zero tail that lies beyond the digits of
/// `coefficient` itself (for example the remainder of a long division).
pub(crate) fn round_coefficient(
    coefficient: &BigInt,
    drop: u64,
    sticky: bool,
    mode: RoundingMode,
) -> BigInt {
    if drop == 0 && !sticky {
        return coefficient.clone();
    }

    let negative = coefficient.sign() == BigSign::Minus;
    let divisor = pow10(drop);
    let (truncated, discarded) = coefficient.magnitude().div_rem(&divisor);

    let mut half = (&discarded * 2u32).cmp(&divisor);
    if half == Ordering::Equal && sticky {
        half = Ordering::Greater;
    }
    let inexact = sticky || !discarded.is_zero();

    let magnitude = if mode.increments(negative, truncated.is_odd(), half, inexact) {
        truncated + 1u32
    } else {
        truncated
    };

    let sign = if negative { BigSign::Minus } else { BigSign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

/// Rounds `coefficient × 10^-scale` to at most `precision` significant
/// digits.
///
/// Returns the new coefficient, the new scale, and whether any non-zero
/// digits were discarded.
pub(crate) fn round_significant(
    coefficient: &BigInt,
    scale: i64,
    precision: u64,
    sticky: bool,
    mode: RoundingMode,
) -> (BigInt, i64, bool) {
    let drop = digit_count(coefficient).saturating_sub(precision);
    if drop == 0 && !sticky {
        return (coefficient.clone(), scale, false);
    }

    let inexact = sticky || !(coefficient.magnitude() % pow10(drop)).is_zero();
    let mut rounded = round_coefficient(coefficient, drop, sticky, mode);
    let mut scale = scale - drop as i64;

    // 9.99 -> 10.0 carries into an extra digit
    if digit_count(&rounded) > precision.max(1) {
        rounded = rounded / 10u32;
        scale -= 1;
    }

    (rounded, scale, inexact)
}

/// Strips trailing zero digits while the scale stays above `min_scale`.
pub(crate) fn strip_trailing_zeros(coefficient: BigInt, scale: i64, min_scale: i64) -> (BigInt, i64) {
    if coefficient.is_zero() {
        return (coefficient, min_scale.max(0));
    }

    let ten = BigInt::from(10u32);
    let mut coefficient = coefficient;
    let mut scale = scale;
    while scale > min_scale {
        let (quotient, remainder) = coefficient.div_rem(&ten);
        if !remainder.is_zero() {
            break;
        }
        coefficient = quotient;
        scale -= 1;
    }
    (coefficient, scale)
}
