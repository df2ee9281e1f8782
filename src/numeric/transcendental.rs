// ============================================================================
// Transcendental Kernel
// Square root, natural logarithm and exponential at a guarded precision
// ============================================================================

use super::decimal_value::{divide, DIVISION_PRECISION};
use super::errors::{NumericError, NumericResult};
use super::rounding::{digit_count, pow10, round_significant, RoundingMode};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign as BigSign};
use num_traits::{One, Zero};

/// Significant digits carried through intermediate results.
pub(crate) const WORKING_PRECISION: u64 = 50;

/// Largest |t| accepted by `exp`; beyond it the result exponent is unusable.
const MAX_EXP_ARGUMENT: i64 = 1_000_000_000;

/// Rounds to `precision` significant digits, nearest-even.
fn trim(x: &BigDecimal, precision: u64) -> BigDecimal {
    let (coefficient, scale) = x.as_bigint_and_exponent();
    let (coefficient, scale, _) =
        round_significant(&coefficient, scale, precision, false, RoundingMode::NearestEven);
    BigDecimal::new(coefficient, scale)
}

/// Series terms below this magnitude no longer affect the result.
fn epsilon(precision: u64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), (precision + 4) as i64)
}

/// Square root of a non-negative value to `precision` significant digits.
pub(crate) fn sqrt(x: &BigDecimal, precision: u64) -> BigDecimal {
    let (coefficient, scale) = x.as_bigint_and_exponent();
    if coefficient.sign() != BigSign::Plus {
        return BigDecimal::zero();
    }

    // Give the integer root precision + 2 digits and keep the scale even
    let mut shift = (2 * (precision + 2)).saturating_sub(digit_count(&coefficient));
    if (scale + shift as i64) % 2 != 0 {
        shift += 1;
    }
    let root = (coefficient.magnitude() * pow10(shift)).sqrt();

    trim(
        &BigDecimal::new(BigInt::from(root), (scale + shift as i64) / 2),
        precision,
    )
}

/// Natural logarithm.
///
/// The argument is brought into 0.9 < x < 1.1 by repeated square roots, then
/// `ln x = 2·atanh((x - 1) / (x + 1))` is summed as a series and scaled back.
///
/// # Errors
/// `UndefinedResult` if `x` is not strictly positive.
pub(crate) fn ln(x: &BigDecimal) -> NumericResult<BigDecimal> {
    if x.sign() != BigSign::Plus {
        return Err(NumericError::UndefinedResult);
    }

    let lower = BigDecimal::new(BigInt::from(9), 1);
    let upper = BigDecimal::new(BigInt::from(11), 1);

    let mut x = trim(x, WORKING_PRECISION);
    let mut doublings: u32 = 0;
    while x <= lower || x >= upper {
        x = sqrt(&x, WORKING_PRECISION);
        doublings += 1;
    }

    let one = BigDecimal::one();
    let z = divide(&(&x - &one), &(&x + &one), WORKING_PRECISION, RoundingMode::NearestEven);
    let z_squared = trim(&(&z * &z), WORKING_PRECISION);
    let eps = epsilon(WORKING_PRECISION);

    let mut sum = z.clone();
    let mut power = z;
    let mut k: u32 = 3;
    loop {
        power = trim(&(&power * &z_squared), WORKING_PRECISION);
        let term = divide(&power, &BigDecimal::from(k), WORKING_PRECISION, RoundingMode::NearestEven);
        if term.abs() < eps {
            break;
        }
        sum = &sum + &term;
        k += 2;
    }

    let factor = BigDecimal::from(BigInt::one() << (doublings + 1));
    Ok(trim(&(&sum * &factor), WORKING_PRECISION))
}

/// Exponential function.
///
/// The argument is halved until |r| <= 0.01, the Taylor series is summed,
/// and the result is squared back once per halving.
///
/// # Errors
/// `Overflow` if |t| exceeds 10^9.
pub(crate) fn exp(t: &BigDecimal) -> NumericResult<BigDecimal> {
    if t.abs() > BigDecimal::from(MAX_EXP_ARGUMENT) {
        return Err(NumericError::Overflow);
    }
    if t.is_zero() {
        return Ok(BigDecimal::one());
    }

    let half = BigDecimal::new(BigInt::from(5), 1);
    let limit = BigDecimal::new(BigInt::one(), 2);

    let mut r = t.clone();
    let mut halvings: u32 = 0;
    while r.abs() > limit {
        r = &r * &half;
        halvings += 1;
    }

    // Each squaring doubles the relative error
    let precision = WORKING_PRECISION + u64::from(halvings) / 3 + 2;
    let r = trim(&r, precision);
    let eps = epsilon(precision);

    let mut sum = &BigDecimal::one() + &r;
    let mut term = r.clone();
    let mut k: u32 = 2;
    loop {
        term = divide(&(&term * &r), &BigDecimal::from(k), precision, RoundingMode::NearestEven);
        if term.abs() < eps {
            break;
        }
        sum = &sum + &term;
        k += 1;
    }

    for _ in 0..halvings {
        sum = trim(&(&sum * &sum), precision);
    }

    Ok(trim(&sum, WORKING_PRECISION))
}

/// `base^exponent` as `exp(exponent · ln base)` for a positive base, rounded
/// to the division precision.
pub(crate) fn power(base: &BigDecimal, exponent: &BigDecimal) -> NumericResult<BigDecimal> {
    let log = ln(base)?;
    let product = trim(&(exponent * &log), WORKING_PRECISION);
    let result = exp(&product)?;
    Ok(trim(&result, DIVISION_PRECISION))
}
