// ============================================================================
// Formatting
// Rendering verbs for DecimalValue
// ============================================================================
//
// Three verbs share one renderer:
// - `Display` ({}): fixed-point at the stored scale
// - `plain()`: fixed-point, or scientific for negative scales and tiny values
// - `as_percent()`: value × 100, fixed-point, '%' appended after padding
//
// An explicit precision ({:.N}) quantizes nearest-even and forces fixed-point.
// Width, fill, alignment and the `+`/`0` flags follow integer padding.

use super::decimal_value::DecimalValue;
use super::rounding::RoundingMode;
use num_bigint::{BigInt, Sign as BigSign};
use num_traits::Zero;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Fixed,
    Plain,
}

/// Adjusted exponents below this switch the plain verb to scientific form.
const PLAIN_MIN_ADJUSTED_EXPONENT: i64 = -6;

/// Renders |coefficient| × 10^-scale in fixed-point notation.
fn fixed_body(coefficient: &BigInt, scale: i64) -> String {
    let digits = coefficient.magnitude().to_str_radix(10);

    if scale <= 0 {
        let mut body = digits;
        body.extend(std::iter::repeat_n('0', scale.unsigned_abs() as usize));
        return body;
    }

    let scale = scale as usize;
    if digits.len() > scale {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        format!("{integer}.{fraction}")
    } else {
        format!("0.{}{digits}", "0".repeat(scale - digits.len()))
    }
}

/// Renders |coefficient| × 10^-scale as `d.ddde±x`.
fn scientific_body(coefficient: &BigInt, scale: i64) -> String {
    let digits = coefficient.magnitude().to_str_radix(10);
    let adjusted = digits.len() as i64 - 1 - scale;
    let (head, tail) = digits.split_at(1);

    let mut body = String::with_capacity(digits.len() + 8);
    body.push_str(head);
    if !tail.is_empty() {
        body.push('.');
        body.push_str(tail);
    }
    body.push('e');
    if adjusted >= 0 {
        body.push('+');
    }
    body.push_str(&adjusted.to_string());
    body
}

fn uses_scientific(coefficient: &BigInt, scale: i64) -> bool {
    let digits = coefficient.magnitude().to_str_radix(10).len() as i64;
    scale < 0 || digits - 1 - scale < PLAIN_MIN_ADJUSTED_EXPONENT
}

fn render(value: &DecimalValue, notation: Notation, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = match f.precision() {
        Some(precision) => value.round_dp(
            i64::try_from(precision).unwrap_or(i64::MAX),
            RoundingMode::NearestEven,
        ),
        None => value.clone(),
    };
    let Some((coefficient, scale)) = value.parts() else {
        return f.pad_integral(true, "", "NaN");
    };

    let body = if f.precision().is_some() {
        fixed_body(&coefficient, scale)
    } else if coefficient.is_zero() {
        "0".to_string()
    } else if notation == Notation::Plain && uses_scientific(&coefficient, scale) {
        scientific_body(&coefficient, scale)
    } else {
        fixed_body(&coefficient, scale)
    };

    f.pad_integral(coefficient.sign() != BigSign::Minus, "", &body)
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, Notation::Fixed, f)
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale() {
            Some(scale) => write!(f, "DecimalValue({}, scale={})", self, scale),
            None => write!(f, "DecimalValue(NaN)"),
        }
    }
}

/// Display adapter for the plain verb, see [`DecimalValue::plain`].
#[derive(Clone, Copy)]
pub struct Plain<'a>(&'a DecimalValue);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.0, Notation::Plain, f)
    }
}

/// Display adapter for the percentage verb, see [`DecimalValue::as_percent`].
#[derive(Clone, Copy)]
pub struct Percent<'a>(&'a DecimalValue);

impl fmt::Display for Percent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(&self.0.mul_int(100), Notation::Fixed, f)?;
        f.write_str("%")
    }
}

impl DecimalValue {
    /// Plain rendering: fixed-point, except scientific notation when the
    /// stored scale is negative or the adjusted exponent is below -6.
    ///
    /// ```
    /// use decimal_goalseek::numeric::DecimalValue;
    ///
    /// assert_eq!(DecimalValue::from_scaled(2345, -6).plain().to_string(), "2.345e+9");
    /// assert_eq!(DecimalValue::from_scaled(2345, -6).to_string(), "2345000000");
    /// ```
    pub fn plain(&self) -> Plain<'_> {
        Plain(self)
    }

    /// Percentage rendering: the value × 100 in fixed-point with a trailing
    /// `%` written after any width padding.
    ///
    /// ```
    /// use decimal_goalseek::numeric::DecimalValue;
    ///
    /// assert_eq!(format!("{:.2}", DecimalValue::permille(25).as_percent()), "2.50%");
    /// ```
    pub fn as_percent(&self) -> Percent<'_> {
        Percent(self)
    }

    /// Lossless text form: fixed-point at the stored scale, `<coefficient>e<n>`
    /// for negative scales, `NaN` when undefined. Parses back to an identical
    /// value and scale.
    pub fn to_canonical_string(&self) -> String {
        match self.parts() {
            Some((coefficient, scale)) if scale < 0 => {
                format!("{}e{}", coefficient, scale.unsigned_abs())
            },
            Some((coefficient, scale)) => {
                let body = fixed_body(&coefficient, scale);
                if coefficient.sign() == BigSign::Minus {
                    format!("-{body}")
                } else {
                    body
                }
            },
            None => "NaN".to_string(),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
