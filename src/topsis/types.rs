//! Core types shared by the fuzzy and crisp rankers.

use crate::error::Result;

/// Optimization direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// Higher values are preferred (maximize).
    Benefit,
    /// Lower values are preferred (minimize).
    Cost,
}

impl Criterion {
    /// Maps a benefit indicator (`true` = benefit) to a direction.
    pub fn from_benefit(is_benefit: bool) -> Self {
        if is_benefit {
            Criterion::Benefit
        } else {
            Criterion::Cost
        }
    }

    pub fn is_benefit(self) -> bool {
        self == Criterion::Benefit
    }
}

impl From<bool> for Criterion {
    fn from(is_benefit: bool) -> Self {
        Self::from_benefit(is_benefit)
    }
}

/// The contract every TOPSIS variant exposes.
///
/// Rankers collect one contribution per decision maker, then compute a
/// ranking from scratch on every [`evaluate`](Ranker::evaluate) call.
/// The fuzzy and crisp rankers are interchangeable behind this trait,
/// differing only in the value type of ratings and weights.
///
/// # Examples
///
/// ```
/// use u_mcdm::topsis::{CrispTopsis, Ranker};
///
/// fn best<R: Ranker>(ranker: &mut R) -> Option<usize> {
///     ranker.evaluate(true).ok()?.first().copied()
/// }
///
/// let mut ranker = CrispTopsis::new(&[true, false]).unwrap();
/// ranker
///     .add_decision_maker(vec![vec![5.0, 3.0], vec![9.0, 2.0]], vec![0.5, 0.5])
///     .unwrap();
/// assert_eq!(best(&mut ranker), Some(1));
/// ```
pub trait Ranker {
    /// Value type of ratings and weights.
    type Value;

    /// Appends one decision maker's decision matrix (alternatives ×
    /// criteria) and criteria weights.
    fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<Self::Value>>,
        criteria_weights: Vec<Self::Value>,
    ) -> Result<()>;

    /// Runs the full pipeline and returns alternative indices, best first.
    ///
    /// With `validate_first`, every stored contribution is re-validated
    /// before computing.
    fn evaluate(&mut self, validate_first: bool) -> Result<Vec<usize>>;

    /// Closeness coefficients of the last successful evaluation, indexed
    /// by alternative position.
    fn ranking_scores(&self) -> Option<&[f64]>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_from_indicator() {
        assert_eq!(Criterion::from(true), Criterion::Benefit);
        assert_eq!(Criterion::from(false), Criterion::Cost);
        assert!(Criterion::Benefit.is_benefit());
        assert!(!Criterion::Cost.is_benefit());
    }
}
