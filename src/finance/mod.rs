// ============================================================================
// Finance Module
// Interest rate conversions and time-value formulas over DecimalValue
// ============================================================================
//
// Rates are fractions (0.05 for 5%). Period counts are unsigned; a zero
// count where one is divided by surfaces as DivisionByZero.

pub mod rates;
pub mod value;

pub use rates::{
    effective_to_nominal_rate, effective_to_periodic_rate, nominal_to_effective_rate,
    nominal_to_real_rate, real_to_nominal_rate, recompound_rate,
};
pub use value::{deflate, future_value, future_value_annuity_due, future_value_ordinary_annuity};
