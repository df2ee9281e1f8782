// ============================================================================
// Time Value
// Compound growth, annuity accumulation and inflation discounting
// ============================================================================

use crate::numeric::{DecimalValue, NumericError, NumericResult};

/// Value of `amount` after `duration` terms at a nominal `rate`
/// compounded `periods` times per term:
/// `amount × (1 + rate/periods)^(duration × periods)`.
///
/// # Errors
/// - `DivisionByZero` if `periods` is zero
/// - `Overflow` if `duration × periods` exceeds `u32::MAX`
pub fn future_value(
    amount: &DecimalValue,
    rate: &DecimalValue,
    duration: u32,
    periods: u32,
) -> NumericResult<DecimalValue> {
    let compoundings = duration.checked_mul(periods).ok_or(NumericError::Overflow)?;
    let periodic = rate.checked_div(&DecimalValue::from_integer(i64::from(periods)))?;
    Ok(amount * &periodic.add_int(1).pow_int(compoundings))
}

/// Accumulated value of `amount_per_period` paid at the end of each of
/// `periods` periods: `amount × ((1 + rate)^periods - 1) / rate`.
///
/// `rate` is per period. A zero rate accumulates `amount × periods`.
pub fn future_value_ordinary_annuity(
    amount_per_period: &DecimalValue,
    rate: &DecimalValue,
    periods: u32,
) -> NumericResult<DecimalValue> {
    if rate.is_zero() {
        return Ok(amount_per_period.mul_int(i64::from(periods)));
    }

    let growth = rate.add_int(1).pow_int(periods).sub_int(1).checked_div(rate)?;
    Ok(amount_per_period * &growth)
}

/// Accumulated value of `amount_per_period` paid at the start of each of
/// `periods` periods: the ordinary annuity grown by one more period.
pub fn future_value_annuity_due(
    amount_per_period: &DecimalValue,
    rate: &DecimalValue,
    periods: u32,
) -> NumericResult<DecimalValue> {
    let ordinary = future_value_ordinary_annuity(amount_per_period, rate, periods)?;
    Ok(&ordinary * &rate.add_int(1))
}

/// Expresses `amount`, due after `periods` periods, in today's money:
/// `amount / (1 + inflation)^periods`.
///
/// `inflation` is per period: 0.05 for 5% a year when `periods` counts years.
///
/// # Errors
/// `DivisionByZero` if `inflation` is -1.
pub fn deflate(amount: &DecimalValue, inflation: &DecimalValue, periods: u32) -> NumericResult<DecimalValue> {
    amount.checked_div(&inflation.add_int(1).pow_int(periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RoundingMode;

    #[test]
    fn test_future_value() {
        // 1500 at 4.3% compounded quarterly for 6 years
        let amount = DecimalValue::new(1500);
        let result = future_value(&amount, &DecimalValue::permille(43), 6, 4).unwrap();
        assert_eq!(result.round_dp(2, RoundingMode::NearestEven).to_string(), "1938.84");

        assert_eq!(
            future_value(&amount, &DecimalValue::permille(43), 6, 0).unwrap_err(),
            NumericError::DivisionByZero
        );
        assert_eq!(
            future_value(&amount, &DecimalValue::permille(43), u32::MAX, 2).unwrap_err(),
            NumericError::Overflow
        );
    }

    #[test]
    fn test_future_value_of_annuities() {
        let payment = DecimalValue::new(1000);
        let rate = DecimalValue::percent(5);

        let ordinary = future_value_ordinary_annuity(&payment, &rate, 5).unwrap();
        assert_eq!(format!("{:.2}", ordinary), "5525.63");

        let due = future_value_annuity_due(&payment, &rate, 5).unwrap();
        assert_eq!(format!("{:.2}", due), "5801.91");
    }

    #[test]
    fn test_annuity_without_interest() {
        let payment = DecimalValue::new(250);
        let total = future_value_ordinary_annuity(&payment, &DecimalValue::zero(), 4).unwrap();
        assert_eq!(total, DecimalValue::new(1000));

        let due = future_value_annuity_due(&payment, &DecimalValue::zero(), 4).unwrap();
        assert_eq!(due, DecimalValue::new(1000));
    }

    #[test]
    fn test_deflate() {
        let today = deflate(&DecimalValue::new(1000), &DecimalValue::permille(25), 20).unwrap();
        assert_eq!(format!("{:.2}", today), "610.27");

        assert_eq!(
            deflate(&DecimalValue::new(1000), &DecimalValue::from_integer(-1), 3).unwrap_err(),
            NumericError::DivisionByZero
        );
    }
}
