// ============================================================================
// Bracket
// Evaluated points and the sign-change interval bisection narrows
// ============================================================================

use crate::numeric::constants::HALF;
use crate::numeric::{DecimalValue, Sign};

/// A domain point paired with its residual `f(x) - target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: DecimalValue,
    pub residual: DecimalValue,
}

impl Point {
    pub fn new(x: DecimalValue, residual: DecimalValue) -> Self {
        Self { x, residual }
    }

    /// Sign of the residual, `None` if it is undefined.
    #[inline]
    pub fn sign(&self) -> Option<Sign> {
        self.residual.sign()
    }

    /// True if the residual is exactly zero.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.residual.is_zero()
    }
}

/// Two points, ordered by x, whose residual signs differ or where one
/// residual is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a bracket from two evaluated points in any order.
    ///
    /// Returns `None` if the points do not enclose a root or either residual
    /// is undefined.
    pub fn new(a: Point, b: Point) -> Option<Self> {
        let (left, right) = if b.x < a.x { (b, a) } else { (a, b) };

        let encloses = match (left.sign()?, right.sign()?) {
            (Sign::Zero, _) | (_, Sign::Zero) => true,
            (l, r) => l != r,
        };

        encloses.then_some(Self { left, right })
    }

    #[inline]
    pub fn left(&self) -> &Point {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Point {
        &self.right
    }

    /// Midpoint `(left + right) × 0.5`.
    pub fn midpoint(&self) -> DecimalValue {
        &(&self.left.x + &self.right.x) * &*HALF
    }

    /// The endpoint whose residual is exactly zero, left first.
    pub fn root_endpoint(&self) -> Option<&Point> {
        if self.left.is_root() {
            Some(&self.left)
        } else if self.right.is_root() {
            Some(&self.right)
        } else {
            None
        }
    }

    /// Replaces the endpoint whose residual shares the sign of `mid`.
    pub fn shrink(&mut self, mid: Point) {
        if self.left.sign() == mid.sign() {
            self.left = mid;
        } else {
            self.right = mid;
        }
    }

    /// Consumes the bracket into its `(left, right)` points.
    pub fn into_points(self) -> (Point, Point) {
        (self.left, self.right)
    }
}
