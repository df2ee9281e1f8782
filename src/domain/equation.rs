// ============================================================================
// Equation Request
// The function, target, domain and precision of one goal-seek request
// ============================================================================

use super::bracket::Point;
use crate::numeric::DecimalValue;
use std::fmt;

/// A single goal-seek request: find x in `[min, max]` with `f(x) == target`
/// to `precision` significant figures.
///
/// The residual `g(x) = f(x) - target` is what the solver actually drives to
/// zero.
pub struct EquationSpec<F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    function: F,
    target: DecimalValue,
    min: DecimalValue,
    max: DecimalValue,
    precision: u32,
}

impl<F> EquationSpec<F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    /// Create a new request.
    ///
    /// The domain endpoints are swapped if given in descending order, and
    /// `precision` is raised to at least one significant figure.
    pub fn new(
        min: DecimalValue,
        max: DecimalValue,
        target: DecimalValue,
        precision: u32,
        function: F,
    ) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            function,
            target,
            min,
            max,
            precision: precision.max(1),
        }
    }

    #[inline]
    pub fn min(&self) -> &DecimalValue {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &DecimalValue {
        &self.max
    }

    #[inline]
    pub fn target(&self) -> &DecimalValue {
        &self.target
    }

    /// Significant figures the root is resolved to
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Evaluates the residual `f(x) - target`.
    pub fn residual(&self, x: &DecimalValue) -> DecimalValue {
        &(self.function)(x) - &self.target
    }

    /// Evaluates the residual at `x` and pairs it with `x`.
    pub fn evaluate(&self, x: DecimalValue) -> Point {
        let residual = self.residual(&x);
        Point::new(x, residual)
    }
}

impl<F> fmt::Debug for EquationSpec<F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquationSpec")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("target", &self.target)
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}
