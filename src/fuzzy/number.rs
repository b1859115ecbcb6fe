//! Triangular fuzzy numbers.

use crate::error::{RankingError, Result};
use std::fmt;
use std::ops::Mul;

/// A triangular fuzzy number `(left, middle, right)`.
///
/// `middle` is the most plausible value; `left` and `right` bound the
/// support of the membership function. The invariant
/// `left <= middle <= right` holds for every value of this type, and all
/// components are finite.
///
/// # Examples
///
/// ```
/// use u_mcdm::fuzzy::Tfn;
///
/// let good = Tfn::new(7.0, 9.0, 10.0).unwrap();
/// assert_eq!(good.middle(), 9.0);
/// assert!(Tfn::new(3.0, 2.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct TriangularFuzzyNumber {
    left: f64,
    middle: f64,
    right: f64,
}

/// Short alias used throughout the crate.
pub type Tfn = TriangularFuzzyNumber;

impl TriangularFuzzyNumber {
    /// The fuzzy zero `(0, 0, 0)`.
    pub const ZERO: Self = Self::crisp(0.0);

    /// The fuzzy one `(1, 1, 1)`.
    pub const ONE: Self = Self::crisp(1.0);

    /// Creates a fuzzy number, checking ordering and finiteness.
    pub fn new(left: f64, middle: f64, right: f64) -> Result<Self> {
        let invalid = |reason| RankingError::InvalidFuzzyNumber {
            left,
            middle,
            right,
            reason,
        };
        if !(left.is_finite() && middle.is_finite() && right.is_finite()) {
            return Err(invalid("components must be finite"));
        }
        if left > middle || middle > right {
            return Err(invalid("expected left <= middle <= right"));
        }
        Ok(Self::from_raw(left, middle, right))
    }

    /// The degenerate fuzzy number `(v, v, v)`.
    pub const fn crisp(value: f64) -> Self {
        Self {
            left: value,
            middle: value,
            right: value,
        }
    }

    /// Builds a value whose ordering the caller has already established.
    pub(crate) const fn from_raw(left: f64, middle: f64, right: f64) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn middle(&self) -> f64 {
        self.middle
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Components as `[left, middle, right]`.
    pub fn components(&self) -> [f64; 3] {
        [self.left, self.middle, self.right]
    }

    /// Returns true when all three components coincide.
    pub fn is_crisp(&self) -> bool {
        self.left == self.middle && self.middle == self.right
    }

    /// Vertex distance between two triangular fuzzy numbers.
    ///
    /// `sqrt(((a_l - b_l)^2 + (a_m - b_m)^2 + (a_r - b_r)^2) / 3)`
    ///
    /// Reference: Chen (2000), "Extensions of the TOPSIS for group
    /// decision-making under fuzzy environment".
    pub fn distance(&self, other: &Self) -> f64 {
        let sum: f64 = self
            .components()
            .iter()
            .zip(other.components().iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        (sum / 3.0).sqrt()
    }

    /// Distance to the fuzzy zero.
    pub fn rms_norm(&self) -> f64 {
        self.distance(&Self::ZERO)
    }

    /// Graded mean integration `(l + 4m + r) / 6`, a crisp representative.
    pub fn defuzzify(&self) -> f64 {
        (self.left + 4.0 * self.middle + self.right) / 6.0
    }
}

/// Component-wise product. Order-preserving for non-negative operands,
/// which is the only case the weighting stage produces.
impl Mul for TriangularFuzzyNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(
            self.left * rhs.left,
            self.middle * rhs.middle,
            self.right * rhs.right,
        )
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.left, self.middle, self.right)
    }
}

impl TryFrom<[f64; 3]> for TriangularFuzzyNumber {
    type Error = RankingError;

    fn try_from(value: [f64; 3]) -> Result<Self> {
        Self::new(value[0], value[1], value[2])
    }
}

impl TryFrom<(f64, f64, f64)> for TriangularFuzzyNumber {
    type Error = RankingError;

    fn try_from((l, m, r): (f64, f64, f64)) -> Result<Self> {
        Self::new(l, m, r)
    }
}

impl From<TriangularFuzzyNumber> for [f64; 3] {
    fn from(value: TriangularFuzzyNumber) -> Self {
        value.components()
    }
}
