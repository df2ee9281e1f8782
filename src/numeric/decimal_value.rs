// ============================================================================
// Decimal Value
// Immutable arbitrary-precision decimal with explicit rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::{
    digit_count, pow10, round_coefficient, round_significant, strip_trailing_zeros, RoundingMode,
};
use super::transcendental;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign as BigSign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Significant digits kept by division and by non-integral powers.
pub const DIVISION_PRECISION: u64 = 34;

/// Exponents of `pow` at or beyond 10^19 overflow for every base but 0 and ±1.
const MAX_EXPONENT_DIGITS: i64 = 18;

/// Immutable arbitrary-precision decimal number.
///
/// Conceptually `coefficient × 10^-scale`, where the coefficient is an
/// arbitrary-precision integer. Every operation returns a new value.
///
/// A value can also be *undefined*. Undefined values are never equal to
/// anything (themselves included) and every ordering comparison involving
/// them is false, mirroring `f64::NAN`. Fallible operations report errors
/// through [`NumericResult`] instead of producing undefined values.
///
/// # Example
/// ```
/// use decimal_goalseek::numeric::{DecimalValue, RoundingMode};
///
/// let price = DecimalValue::new(50);                 // 50.00
/// let discount = DecimalValue::percent(15);          // 0.15
/// let net = &price - &(&price * &discount);          // 42.5000
/// assert_eq!(net.to_string(), "42.5000");
/// assert_eq!(net.round_dp(2, RoundingMode::NearestEven).to_string(), "42.50");
/// ```
#[derive(Clone)]
pub struct DecimalValue {
    value: Option<BigDecimal>,
}

/// Sign of a defined decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from whole currency units, at scale 2 (`new(50)` is `50.00`).
    pub fn new(units: i64) -> Self {
        Self::from_parts(BigInt::from(units) * 100u32, 2)
    }

    /// Create from minor currency units (cents), at scale 2.
    pub fn from_cents(cents: i64) -> Self {
        Self::from_parts(BigInt::from(cents), 2)
    }

    /// Create an integer value at scale 0.
    pub fn from_integer(value: i64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }

    /// Create `value × 10^-scale`, stripped of trailing zeros.
    ///
    /// `from_scaled(1230, 1)` is `123`, `from_scaled(42, -2)` is `4200`
    /// (stored as `42` with scale `-2`).
    pub fn from_scaled(value: i64, scale: i64) -> Self {
        let (coefficient, scale) = strip_trailing_zeros(BigInt::from(value), scale, i64::MIN);
        Self::from_parts(coefficient, scale)
    }

    /// Percentage: `percent(2)` is `0.02`.
    pub fn percent(value: i64) -> Self {
        Self::from_scaled(value, 2)
    }

    /// Permille: `permille(3)` is `0.003`.
    pub fn permille(value: i64) -> Self {
        Self::from_scaled(value, 3)
    }

    /// Basis points (permyriad): `basis_points(4)` is `0.0004`.
    pub fn basis_points(value: i64) -> Self {
        Self::from_scaled(value, 4)
    }

    /// Zero at scale 0.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// One at scale 0.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// The undefined (NaN-equivalent) value.
    pub const fn undefined() -> Self {
        Self { value: None }
    }

    pub(crate) fn from_parts(coefficient: BigInt, scale: i64) -> Self {
        Self::defined(BigDecimal::new(coefficient, scale))
    }

    pub(crate) fn defined(value: BigDecimal) -> Self {
        Self { value: Some(value) }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is undefined.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.value.is_none()
    }

    /// Check if the value is exactly zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.as_ref().is_some_and(Zero::is_zero)
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() == Some(Sign::Negative)
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() == Some(Sign::Positive)
    }

    /// Sign of the value, or `None` if undefined.
    pub fn sign(&self) -> Option<Sign> {
        self.value.as_ref().map(|v| match v.sign() {
            BigSign::Minus => Sign::Negative,
            BigSign::NoSign => Sign::Zero,
            BigSign::Plus => Sign::Positive,
        })
    }

    /// Stored scale (digits right of the decimal point), or `None` if
    /// undefined. Negative scales denote trailing zeros left of the point.
    pub fn scale(&self) -> Option<i64> {
        self.parts().map(|(_, scale)| scale)
    }

    /// Borrow the underlying big decimal, or `None` if undefined.
    pub fn as_big_decimal(&self) -> Option<&BigDecimal> {
        self.value.as_ref()
    }

    /// Coefficient and scale, or `None` if undefined.
    pub(crate) fn parts(&self) -> Option<(BigInt, i64)> {
        self.value.as_ref().map(BigDecimal::as_bigint_and_exponent)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    fn combine(&self, rhs: &Self, op: impl FnOnce(&BigDecimal, &BigDecimal) -> BigDecimal) -> Self {
        match (&self.value, &rhs.value) {
            (Some(a), Some(b)) => Self::defined(op(a, b)),
            _ => Self::undefined(),
        }
    }

    /// Adds an integer.
    pub fn add_int(&self, rhs: i64) -> Self {
        self + &Self::from_integer(rhs)
    }

    /// Subtracts an integer.
    pub fn sub_int(&self, rhs: i64) -> Self {
        self - &Self::from_integer(rhs)
    }

    /// Multiplies by an integer; the scale is unchanged.
    pub fn mul_int(&self, rhs: i64) -> Self {
        self * &Self::from_integer(rhs)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        match &self.value {
            Some(v) => Self::defined(v.abs()),
            None => Self::undefined(),
        }
    }

    /// Checked division, correctly rounded to [`DIVISION_PRECISION`]
    /// significant digits (nearest, ties to even).
    ///
    /// Exact quotients are reduced toward the scale `lhs.scale - rhs.scale`,
    /// so `10.00 / 4` is `2.50`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `UndefinedResult` if either operand is undefined
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        let (Some(lhs), Some(rhs)) = (&self.value, &rhs.value) else {
            return Err(NumericError::UndefinedResult);
        };
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        Ok(Self::defined(divide(
            lhs,
            rhs,
            DIVISION_PRECISION,
            RoundingMode::NearestEven,
        )))
    }

    /// Raises the value to a non-negative integer power by repeated squaring.
    ///
    /// The result is exact, at `scale × exponent`. `x^0` is `1`.
    pub fn pow_int(&self, exponent: u32) -> Self {
        let Some(base) = &self.value else {
            return Self::undefined();
        };

        let mut result = BigDecimal::one();
        let mut square = base.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = &result * &square;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = &square * &square;
            }
        }

        Self::defined(result)
    }

    /// Raises the value to an arbitrary decimal power.
    ///
    /// Integral exponents are computed exactly (negative ones as a checked
    /// division of one by the power). Other exponents use `exp(y·ln x)` and
    /// are rounded to [`DIVISION_PRECISION`] significant digits.
    ///
    /// # Errors
    /// - `UndefinedResult` for undefined operands, or a negative base with a
    ///   non-integral exponent
    /// - `DivisionByZero` for zero raised to a negative power
    /// - `Overflow` if the result's exponent is out of range
    pub fn pow(&self, exponent: &Self) -> NumericResult<Self> {
        let (Some(base), Some(power)) = (&self.value, &exponent.value) else {
            return Err(NumericError::UndefinedResult);
        };

        let (coefficient, scale) = power.as_bigint_and_exponent();
        let (coefficient, scale) = strip_trailing_zeros(coefficient, scale, 0);

        // Checked before any power of ten is built for the exponent
        let adjusted = digit_count(&coefficient) as i64 - 1 - scale;
        if adjusted > MAX_EXPONENT_DIGITS {
            let exponent_negative = coefficient.sign() == BigSign::Minus;
            return if base.is_zero() {
                if exponent_negative {
                    Err(NumericError::DivisionByZero)
                } else {
                    Ok(Self::zero())
                }
            } else if base.is_one() {
                Ok(Self::one())
            } else if base.abs().is_one() {
                // -1: odd only when the exponent is an odd integer
                match scale.cmp(&0) {
                    Ordering::Greater => Err(NumericError::UndefinedResult),
                    Ordering::Equal if coefficient.is_odd() => Ok(-Self::one()),
                    _ => Ok(Self::one()),
                }
            } else {
                Err(NumericError::Overflow)
            };
        }

        let integral = (scale <= 0).then(|| coefficient * BigInt::from(pow10(scale.unsigned_abs())));

        if let Some(integral) = &integral {
            if let Some(n) = integral.magnitude().to_u32() {
                let result = self.pow_int(n);
                return if integral.sign() == BigSign::Minus {
                    Self::one().checked_div(&result)
                } else {
                    Ok(result)
                };
            }
        }

        if base.is_zero() {
            return match power.sign() {
                BigSign::Minus => Err(NumericError::DivisionByZero),
                _ => Ok(Self::zero()),
            };
        }

        if base.sign() == BigSign::Minus {
            // Only huge integral exponents reach here; the sign follows parity
            let Some(integral) = integral else {
                return Err(NumericError::UndefinedResult);
            };
            let magnitude = transcendental::power(&base.abs(), power)?;
            return Ok(if integral.is_odd() {
                Self::defined(-magnitude)
            } else {
                Self::defined(magnitude)
            });
        }

        transcendental::power(base, power).map(Self::defined)
    }

    /// Raises the value to the rational power `numerator / denominator`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - any error of [`DecimalValue::pow`]
    pub fn pow_frac(&self, numerator: i64, denominator: i64) -> NumericResult<Self> {
        let exponent =
            Self::from_integer(numerator).checked_div(&Self::from_integer(denominator))?;
        self.pow(&exponent)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Rounds to `sigfigs` significant figures.
    ///
    /// Values with no more than `sigfigs` digits are returned unchanged, as
    /// is everything when `sigfigs` is zero.
    pub fn round(&self, sigfigs: u32, mode: RoundingMode) -> Self {
        let Some((coefficient, scale)) = self.parts() else {
            return Self::undefined();
        };
        if sigfigs == 0 || coefficient.is_zero() {
            return self.clone();
        }

        let (coefficient, scale, _) =
            round_significant(&coefficient, scale, u64::from(sigfigs), false, mode);
        Self::from_parts(coefficient, scale)
    }

    /// Quantizes to exactly `decimal_places` fractional digits.
    ///
    /// Negative `decimal_places` round left of the decimal point.
    pub fn round_dp(&self, decimal_places: i64, mode: RoundingMode) -> Self {
        let Some((coefficient, scale)) = self.parts() else {
            return Self::undefined();
        };

        match scale.cmp(&decimal_places) {
            Ordering::Greater => {
                let drop = scale.abs_diff(decimal_places);
                Self::from_parts(
                    round_coefficient(&coefficient, drop, false, mode),
                    decimal_places,
                )
            },
            Ordering::Less => {
                let pad = BigInt::from(pow10(scale.abs_diff(decimal_places)));
                Self::from_parts(coefficient * pad, decimal_places)
            },
            Ordering::Equal => self.clone(),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Tolerance comparison to `sigfigs` significant figures.
    ///
    /// The operands are equal when they differ by at most one unit in the
    /// significant figure after the last one kept, measured against the
    /// larger magnitude. The tolerance only widens as `sigfigs` shrinks, so
    /// equality at `p` figures implies equality at every `p' < p`. A
    /// `sigfigs` of zero compares like one.
    ///
    /// `1.01` and `1.00` are equal to 1 and 2 significant figures, but not
    /// to 3. Undefined values are never equal.
    pub fn equal_to(&self, other: &Self, sigfigs: u32) -> bool {
        let (Some(lhs), Some(rhs)) = (&self.value, &other.value) else {
            return false;
        };
        if lhs == rhs {
            return true;
        }

        let larger = lhs.abs().max(rhs.abs());
        let (coefficient, scale) = larger.as_bigint_and_exponent();
        let adjusted = digit_count(&coefficient) as i64 - 1 - scale;

        // 10^(adjusted - sigfigs)
        let tolerance = BigDecimal::new(BigInt::one(), i64::from(sigfigs.max(1)) - adjusted);
        (lhs - rhs).abs() <= tolerance
    }

    /// Returns the largest defined value, keeping the first on ties.
    pub fn max_of<'a>(values: impl IntoIterator<Item = &'a DecimalValue>) -> Option<DecimalValue> {
        Self::select(values, Ordering::Greater)
    }

    /// Returns the smallest defined value, keeping the first on ties.
    pub fn min_of<'a>(values: impl IntoIterator<Item = &'a DecimalValue>) -> Option<DecimalValue> {
        Self::select(values, Ordering::Less)
    }

    fn select<'a>(values: impl IntoIterator<Item = &'a DecimalValue>, wanted: Ordering) -> Option<DecimalValue> {
        let mut best: Option<&DecimalValue> = None;
        for value in values {
            if value.is_undefined() {
                continue;
            }
            let replace = match best {
                Some(current) => value.partial_cmp(current) == Some(wanted),
                None => true,
            };
            if replace {
                best = Some(value);
            }
        }
        best.cloned()
    }
}

/// Divides `lhs` by a non-zero `rhs`, rounding the quotient to `precision`
/// significant digits.
pub(crate) fn divide(
    lhs: &BigDecimal,
    rhs: &BigDecimal,
    precision: u64,
    mode: RoundingMode,
) -> BigDecimal {
    let (lhs_coefficient, lhs_scale) = lhs.as_bigint_and_exponent();
    let (rhs_coefficient, rhs_scale) = rhs.as_bigint_and_exponent();
    let ideal_scale = lhs_scale - rhs_scale;

    if lhs_coefficient.is_zero() {
        return BigDecimal::new(BigInt::zero(), ideal_scale);
    }

    // Shift the dividend so the integer quotient carries precision + 1 digits
    let shift = (precision + digit_count(&rhs_coefficient) + 1)
        .saturating_sub(digit_count(&lhs_coefficient));
    let dividend = lhs_coefficient.magnitude() * pow10(shift);
    let (quotient, remainder) = dividend.div_rem(rhs_coefficient.magnitude());

    let sign = if lhs_coefficient.sign() == rhs_coefficient.sign() {
        BigSign::Plus
    } else {
        BigSign::Minus
    };
    let quotient = BigInt::from_biguint(sign, quotient);
    let scale = ideal_scale + shift as i64;

    let (coefficient, scale, inexact) =
        round_significant(&quotient, scale, precision, !remainder.is_zero(), mode);

    if inexact {
        BigDecimal::new(coefficient, scale)
    } else {
        let (coefficient, scale) = strip_trailing_zeros(coefficient, scale, ideal_scale);
        BigDecimal::new(coefficient, scale)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl<'a, 'b> Add<&'b DecimalValue> for &'a DecimalValue {
    type Output = DecimalValue;

    fn add(self, rhs: &'b DecimalValue) -> DecimalValue {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<'a> Add<&'a DecimalValue> for DecimalValue {
    type Output = DecimalValue;

    fn add(self, rhs: &'a DecimalValue) -> DecimalValue {
        &self + rhs
    }
}

impl Add for DecimalValue {
    type Output = DecimalValue;

    fn add(self, rhs: DecimalValue) -> DecimalValue {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b DecimalValue> for &'a DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: &'b DecimalValue) -> DecimalValue {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<'a> Sub<&'a DecimalValue> for DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: &'a DecimalValue) -> DecimalValue {
        &self - rhs
    }
}

impl Sub for DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: DecimalValue) -> DecimalValue {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b DecimalValue> for &'a DecimalValue {
    type Output = DecimalValue;

    fn mul(self, rhs: &'b DecimalValue) -> DecimalValue {
        self.combine(rhs, |a, b| a * b)
    }
}

impl<'a> Mul<&'a DecimalValue> for DecimalValue {
    type Output = DecimalValue;

    fn mul(self, rhs: &'a DecimalValue) -> DecimalValue {
        &self * rhs
    }
}

impl Mul for DecimalValue {
    type Output = DecimalValue;

    fn mul(self, rhs: DecimalValue) -> DecimalValue {
        &self * &rhs
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> DecimalValue {
        match &self.value {
            Some(v) => DecimalValue::defined(-v.clone()),
            None => DecimalValue::undefined(),
        }
    }
}

impl Neg for DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> DecimalValue {
        -&self
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigDecimal> for DecimalValue {
    fn from(value: BigDecimal) -> Self {
        Self::defined(value)
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    /// Exact conversion; the scale is preserved.
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::from_parts(BigInt::from(value.mantissa()), i64::from(value.scale()))
    }
}

impl TryFrom<&DecimalValue> for rust_decimal::Decimal {
    type Error = NumericError;

    /// Convert to rust_decimal::Decimal at API boundaries.
    ///
    /// # Errors
    /// - `UndefinedResult` for the undefined value
    /// - `PrecisionLoss` if more than 28 fractional digits remain after
    ///   stripping trailing zeros
    /// - `Overflow` if the coefficient exceeds 96 bits
    fn try_from(value: &DecimalValue) -> NumericResult<Self> {
        let (coefficient, scale) = value.parts().ok_or(NumericError::UndefinedResult)?;
        let (coefficient, scale) = strip_trailing_zeros(coefficient, scale, 0);

        let (coefficient, scale) = if scale < 0 {
            (coefficient * BigInt::from(pow10(scale.unsigned_abs())), 0)
        } else {
            (coefficient, scale)
        };
        if scale > 28 {
            return Err(NumericError::PrecisionLoss);
        }

        let mantissa = coefficient.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

impl FromStr for DecimalValue {
    type Err = NumericError;

    /// Parse from plain (`"-12.50"`) or exponent (`"2.345e+9"`) notation.
    ///
    /// The written scale is preserved; `"NaN"` parses to the undefined value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if s.eq_ignore_ascii_case("nan") {
            return Ok(Self::undefined());
        }

        BigDecimal::from_str(s)
            .map(Self::defined)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_constructor_scales() {
        assert_eq!(DecimalValue::new(50).scale(), Some(2));
        assert_eq!(DecimalValue::new(50).to_string(), "50.00");
        assert_eq!(DecimalValue::from_cents(1234).to_string(), "12.34");
        assert_eq!(DecimalValue::from_integer(42).scale(), Some(0));
        assert_eq!(DecimalValue::from_scaled(42, 0).to_string(), "42");
    }

    #[test]
    fn test_reducing_constructors() {
        assert_eq!(DecimalValue::percent(50).to_string(), "0.5");
        assert_eq!(DecimalValue::percent(50).scale(), Some(1));
        assert_eq!(DecimalValue::permille(20).to_string(), "0.02");
        assert_eq!(DecimalValue::basis_points(10).to_string(), "0.001");
        assert_eq!(DecimalValue::from_scaled(1230, 1).scale(), Some(0));
        assert_eq!(DecimalValue::from_scaled(-500, 2).to_string(), "-5");
        assert_eq!(DecimalValue::from_scaled(0, 5).scale(), Some(0));
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(DecimalValue::new(1), DecimalValue::from_cents(100));
        assert_eq!(dec("1.10"), dec("1.1"));
        assert_ne!(dec("1.10"), dec("1.01"));
    }

    #[test]
    fn test_undefined_semantics() {
        let nan = DecimalValue::undefined();
        assert!(nan.is_undefined());
        assert_ne!(nan, nan.clone());
        assert_ne!(nan, DecimalValue::zero());
        assert!(!(nan < DecimalValue::one()));
        assert!(!(nan > DecimalValue::one()));
        assert!(!(DecimalValue::one() < nan));
        assert!((&nan + &DecimalValue::one()).is_undefined());
        assert_eq!(nan.sign(), None);
        assert_eq!(nan.scale(), None);
    }

    #[test]
    fn test_add_sub_scales() {
        let a = DecimalValue::new(5);
        let b = DecimalValue::new(10);
        assert_eq!((&a + &b).to_string(), "15.00");
        assert_eq!((&a - &b).to_string(), "-5.00");
        assert_eq!(DecimalValue::from_cents(99).add_int(1).to_string(), "1.99");
        assert_eq!(DecimalValue::from_cents(499).sub_int(4).to_string(), "0.99");

        let mixed = &dec("1.5") + &dec("0.25");
        assert_eq!(mixed.scale(), Some(2));
    }

    #[test]
    fn test_mul_scales() {
        let product = DecimalValue::new(50) * DecimalValue::percent(50);
        assert_eq!(product.to_string(), "25.000");

        let tiny = DecimalValue::basis_points(1234) * DecimalValue::basis_points(1);
        assert_eq!(tiny, DecimalValue::from_scaled(1234, 8));
        assert_eq!(
            DecimalValue::new(100) * DecimalValue::permille(1),
            DecimalValue::from_scaled(1, 1)
        );
        assert_eq!(DecimalValue::new(-1) * DecimalValue::new(-1), DecimalValue::new(1));
        assert_eq!(DecimalValue::from_cents(250).mul_int(4).to_string(), "10.00");
    }

    #[test]
    fn test_checked_div() {
        let third = DecimalValue::new(1).checked_div(&DecimalValue::new(3)).unwrap();
        assert_eq!(third.to_string(), "0.3333333333333333333333333333333333");

        let two_thirds = DecimalValue::new(2).checked_div(&DecimalValue::new(3)).unwrap();
        assert_eq!(two_thirds.to_string(), "0.6666666666666666666666666666666667");

        let exact = DecimalValue::new(10).checked_div(&DecimalValue::from_integer(4)).unwrap();
        assert_eq!(exact.to_string(), "2.50");

        let negative = DecimalValue::from_integer(-7).checked_div(&DecimalValue::from_integer(2)).unwrap();
        assert_eq!(negative.to_string(), "-3.5");
    }

    #[test]
    fn test_checked_div_by_self_is_one() {
        let x = dec("123.456");
        let one = x.checked_div(&x).unwrap();
        assert_eq!(one, DecimalValue::one());
        assert_eq!(one.scale(), Some(0));
    }

    #[test]
    fn test_checked_div_errors() {
        let result = DecimalValue::new(1).checked_div(&DecimalValue::zero());
        assert_eq!(result.unwrap_err(), NumericError::DivisionByZero);

        let result = DecimalValue::undefined().checked_div(&DecimalValue::one());
        assert_eq!(result.unwrap_err(), NumericError::UndefinedResult);
    }

    #[test]
    fn test_pow_int() {
        assert_eq!(DecimalValue::new(3).pow_int(3).to_string(), "27.000000");
        assert_eq!(dec("1.5").pow_int(2).to_string(), "2.25");
        assert_eq!(dec("-2").pow_int(3), dec("-8"));
        assert_eq!(dec("7.25").pow_int(0), DecimalValue::one());
        assert!(DecimalValue::undefined().pow_int(2).is_undefined());
    }

    #[test]
    fn test_pow_integral_exponent_is_exact() {
        let squared = dec("1.1").pow(&DecimalValue::from_integer(2)).unwrap();
        assert_eq!(squared.to_string(), "1.21");

        let inverse = dec("4").pow(&dec("-1.0")).unwrap();
        assert_eq!(inverse, dec("0.25"));
    }

    #[test]
    fn test_pow_fractional_exponent() {
        let root = DecimalValue::new(16).pow(&DecimalValue::percent(50)).unwrap();
        assert_eq!(root.round_dp(2, RoundingMode::NearestAway).to_string(), "4.00");
        assert!((&root - &dec("4")).abs() < dec("1e-30"));

        let growth = dec("1.05").pow(&dec("2.5")).unwrap();
        assert!(growth.equal_to(&dec("1.1297263219470457217501195145274"), 30));
    }

    #[test]
    fn test_pow_frac() {
        let cube_root = DecimalValue::new(27).pow_frac(1, 3).unwrap();
        assert_eq!(cube_root.round_dp(2, RoundingMode::NearestEven).to_string(), "3.00");

        let fourth = dec("81").pow_frac(3, 4).unwrap();
        assert!(fourth.equal_to(&dec("27"), 20));

        assert_eq!(
            DecimalValue::new(2).pow_frac(1, 0).unwrap_err(),
            NumericError::DivisionByZero
        );
    }

    #[test]
    fn test_pow_undefined_cases() {
        assert_eq!(
            dec("-8").pow(&dec("0.5")).unwrap_err(),
            NumericError::UndefinedResult
        );
        assert_eq!(
            DecimalValue::zero().pow(&dec("-2")).unwrap_err(),
            NumericError::DivisionByZero
        );
        assert_eq!(DecimalValue::zero().pow(&dec("0.5")).unwrap(), DecimalValue::zero());
    }

    #[test]
    fn test_pow_huge_exponent_is_bounded() {
        let huge = dec("1e1000000000000");
        assert_eq!(dec("2").pow(&huge).unwrap_err(), NumericError::Overflow);
        assert_eq!(dec("0.5").pow(&-&huge).unwrap_err(), NumericError::Overflow);
        assert_eq!(DecimalValue::one().pow(&huge).unwrap(), DecimalValue::one());
        assert_eq!(DecimalValue::zero().pow(&huge).unwrap(), DecimalValue::zero());
        assert_eq!(
            DecimalValue::zero().pow(&-&huge).unwrap_err(),
            NumericError::DivisionByZero
        );
        assert_eq!(dec("-1").pow(&huge).unwrap(), DecimalValue::one());
        assert_eq!(
            dec("-1").pow(&dec("12345678901234567890123")).unwrap(),
            -DecimalValue::one()
        );
        assert_eq!(
            dec("-1").pow(&dec("12345678901234567890.5")).unwrap_err(),
            NumericError::UndefinedResult
        );
    }

    #[test]
    fn test_round_sigfigs() {
        let value = DecimalValue::from_cents(123_999_999);
        let rounded = value.round(3, RoundingMode::TowardNegativeInfinity);
        assert_eq!(rounded.to_string(), "1230000");

        assert_eq!(dec("9.99").round(2, RoundingMode::NearestEven).to_string(), "10");
        assert_eq!(dec("-0.0012345").round(3, RoundingMode::NearestEven).to_string(), "-0.00123");
        assert_eq!(dec("1.5").round(5, RoundingMode::NearestEven).to_string(), "1.5");
        assert_eq!(dec("2.5").round(1, RoundingMode::NearestEven).to_string(), "2");
        assert_eq!(dec("2.5").round(1, RoundingMode::NearestAway).to_string(), "3");
    }

    #[test]
    fn test_round_has_no_lasting_effect() {
        let value = dec("2.5");
        let _ = value.round(1, RoundingMode::AwayFromZero);
        assert_eq!(value.round(1, RoundingMode::NearestEven).to_string(), "2");
        assert_eq!(value.to_string(), "2.5");
    }

    #[test]
    fn test_round_dp() {
        let value = DecimalValue::basis_points(1234);
        assert_eq!(value.round_dp(1, RoundingMode::TowardPositiveInfinity).to_string(), "0.2");
        assert_eq!(value.round_dp(6, RoundingMode::NearestEven).to_string(), "0.123400");
        assert_eq!(dec("1e5").round_dp(2, RoundingMode::NearestEven).to_string(), "100000.00");
        assert_eq!(dec("1250").round_dp(-2, RoundingMode::NearestEven).to_string(), "1200");
        assert_eq!(dec("-0.125").round_dp(2, RoundingMode::TowardZero).to_string(), "-0.12");
    }

    #[test]
    fn test_equal_to() {
        let a = DecimalValue::from_cents(101);
        let b = DecimalValue::from_cents(100);
        assert!(a.equal_to(&b, 1));
        assert!(a.equal_to(&b, 2));
        assert!(!a.equal_to(&b, 3));

        assert!(DecimalValue::new(0).equal_to(&DecimalValue::new(0), 1));
        assert!(!DecimalValue::new(1).equal_to(&DecimalValue::new(0), 1));
        assert!(DecimalValue::from_cents(100).equal_to(&DecimalValue::new(1), 3));
        assert!(!DecimalValue::from_scaled(123, 2).equal_to(&DecimalValue::from_scaled(123, 3), 3));
        assert!(DecimalValue::from_scaled(1230, 1).equal_to(&DecimalValue::from_scaled(123, 0), 3));
        assert!(DecimalValue::from_scaled(123, -1).equal_to(&DecimalValue::from_scaled(1230, 0), 3));
        assert!(!DecimalValue::undefined().equal_to(&DecimalValue::undefined(), 3));
    }

    #[test]
    fn test_equal_to_widens_with_fewer_sigfigs() {
        // Rounding each side would make these equal at 2 figures but not at 1
        let a = dec("2.54");
        let b = dec("2.5");
        assert!(a.equal_to(&b, 1));
        assert!(!a.equal_to(&b, 2));

        let near = dec("2.4999");
        let far = dec("2.5001");
        for sigfigs in 1..=3 {
            assert!(near.equal_to(&far, sigfigs));
        }
        assert!(!near.equal_to(&far, 5));

        assert_eq!(a.equal_to(&b, 0), a.equal_to(&b, 1));
        assert!(!dec("-0.001").equal_to(&dec("0.001"), 1));
    }

    #[test]
    fn test_ordering() {
        assert!(!(DecimalValue::new(1) < DecimalValue::from_cents(100)));
        assert!(DecimalValue::from_cents(99) < DecimalValue::new(1));
        assert!(dec("-3") < dec("-2.5"));
    }

    #[test]
    fn test_max_min_of() {
        let values = [
            DecimalValue::new(1),
            DecimalValue::from_cents(200),
            DecimalValue::undefined(),
            DecimalValue::from_integer(1),
        ];
        assert_eq!(DecimalValue::max_of(&values).unwrap().to_string(), "2.00");
        assert_eq!(DecimalValue::min_of(&values).unwrap().to_string(), "1.00");
        let empty: [DecimalValue; 0] = [];
        assert!(DecimalValue::max_of(&empty).is_none());
    }

    #[test]
    fn test_sign_and_neg() {
        assert_eq!(dec("-0.5").sign(), Some(Sign::Negative));
        assert_eq!(dec("0.00").sign(), Some(Sign::Zero));
        assert!(dec("3").is_positive());
        assert_eq!((-dec("3.25")).to_string(), "-3.25");
        assert_eq!(dec("-3.25").abs().to_string(), "3.25");
    }

    #[test]
    fn test_from_str() {
        let x = dec("123.450");
        assert_eq!(x.scale(), Some(3));
        assert_eq!(dec("2.345e+9").scale(), Some(-6));
        assert!(dec("NaN").is_undefined());

        let result: Result<DecimalValue, _> = "not_a_number".parse();
        assert_eq!(result.unwrap_err(), NumericError::InvalidInput);
        let result: Result<DecimalValue, _> = "   ".parse();
        assert_eq!(result.unwrap_err(), NumericError::InvalidInput);
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = DecimalValue::from(d);
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.scale(), Some(2));
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::try_from(&dec("123.4500")).unwrap();
        assert_eq!(d, Decimal::new(12345, 2));

        let d = Decimal::try_from(&dec("2.5e3")).unwrap();
        assert_eq!(d, Decimal::from(2500));

        let third = DecimalValue::new(1).checked_div(&DecimalValue::new(3)).unwrap();
        assert_eq!(Decimal::try_from(&third).unwrap_err(), NumericError::PrecisionLoss);

        let huge = dec("1e40");
        assert_eq!(Decimal::try_from(&huge).unwrap_err(), NumericError::Overflow);

        assert_eq!(
            Decimal::try_from(&DecimalValue::undefined()).unwrap_err(),
            NumericError::UndefinedResult
        );
    }
}
