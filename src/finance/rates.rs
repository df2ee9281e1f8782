// ============================================================================
// Rate Conversions
// Nominal, effective, periodic and real interest rates
// ============================================================================

use crate::numeric::{DecimalValue, NumericResult};

fn periods_value(periods: u32) -> DecimalValue {
    DecimalValue::from_integer(i64::from(periods))
}

/// Effective rate of a nominal rate compounded `periods` times:
/// `(1 + rate/periods)^periods - 1`.
///
/// A nominal rate is the periodic rate multiplied by the number of periods,
/// so it understates the effective rate. 6% compounded monthly applies 0.5%
/// each month, an effective 6.17%.
///
/// # Errors
/// `DivisionByZero` if `periods` is zero.
pub fn nominal_to_effective_rate(rate: &DecimalValue, periods: u32) -> NumericResult<DecimalValue> {
    let periodic = rate.checked_div(&periods_value(periods))?;
    Ok(periodic.add_int(1).pow_int(periods).sub_int(1))
}

/// Inverse of [`nominal_to_effective_rate`]:
/// `((1 + rate)^(1/periods) - 1) × periods`.
///
/// # Errors
/// `DivisionByZero` if `periods` is zero.
pub fn effective_to_nominal_rate(rate: &DecimalValue, periods: u32) -> NumericResult<DecimalValue> {
    Ok(effective_to_periodic_rate(rate, periods)?.mul_int(i64::from(periods)))
}

/// Periodic rate that compounds to `rate` over `periods` periods:
/// `(1 + rate)^(1/periods) - 1`.
///
/// # Errors
/// - `DivisionByZero` if `periods` is zero
/// - `UndefinedResult` if `1 + rate` is negative and `periods` exceeds one
pub fn effective_to_periodic_rate(rate: &DecimalValue, periods: u32) -> NumericResult<DecimalValue> {
    Ok(rate.add_int(1).pow_frac(1, i64::from(periods))?.sub_int(1))
}

/// Real rate after inflation (Fisher equation): `(1 + rate)/(1 + inflation) - 1`.
///
/// # Errors
/// `DivisionByZero` if `inflation` is -1.
pub fn nominal_to_real_rate(rate: &DecimalValue, inflation: &DecimalValue) -> NumericResult<DecimalValue> {
    Ok(rate.add_int(1).checked_div(&inflation.add_int(1))?.sub_int(1))
}

/// Nominal rate before inflation (Fisher equation): `(1 + rate)(1 + inflation) - 1`.
pub fn real_to_nominal_rate(rate: &DecimalValue, inflation: &DecimalValue) -> DecimalValue {
    (&rate.add_int(1) * &inflation.add_int(1)).sub_int(1)
}

/// Converts a nominal rate compounded `current` times to the equivalent
/// rate compounded `target` times.
///
/// 4% compounded quarterly is 3.98% compounded daily.
///
/// # Errors
/// `DivisionByZero` if either period count is zero.
pub fn recompound_rate(rate: &DecimalValue, current: u32, target: u32) -> NumericResult<DecimalValue> {
    let periodic = rate.checked_div(&periods_value(current))?;
    let recompounded = periodic
        .add_int(1)
        .pow_frac(i64::from(current), i64::from(target))?
        .sub_int(1);
    Ok(recompounded.mul_int(i64::from(target)))
}
