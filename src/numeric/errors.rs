// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result magnitude is outside the supported exponent range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// The operation has no defined numeric value (e.g. an undefined operand,
    /// or a negative base raised to a non-integral power)
    UndefinedResult,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl NumericError {
    /// Returns true for the conditions that leave a calculation without a
    /// defined numeric value.
    pub const fn is_undefined_result(self) -> bool {
        matches!(
            self,
            NumericError::DivisionByZero | NumericError::UndefinedResult
        )
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exponent out of range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::UndefinedResult => {
                write!(f, "undefined result: operation has no numeric value")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
