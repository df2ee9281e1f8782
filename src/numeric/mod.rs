// ============================================================================
// Numeric Module
// Arbitrary-precision decimals with explicit, pure rounding
// ============================================================================
//
// This module provides:
// - DecimalValue: immutable decimal with an optional undefined (NaN) state
// - RoundingMode: the closed set of rounding rules
// - NumericError: Error types for arithmetic operations
// - Rendering verbs (Display, plain, as_percent) and shared constants
//
// Design principles:
// - No floating-point operations
// - Fallible arithmetic returns Result (no panics)
// - Rounding mode is always an argument, never state

pub mod constants;
mod decimal_value;
mod errors;
mod format;
mod rounding;
mod transcendental;

pub use decimal_value::{DecimalValue, Sign, DIVISION_PRECISION};
pub use errors::{NumericError, NumericResult};
pub use format::{Percent, Plain};
pub use rounding::RoundingMode;
