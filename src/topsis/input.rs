//! Decision-maker contributions and their shape validation.

use super::types::Criterion;
use crate::error::{RankingError, Result};

/// One decision maker's input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution<T> {
    /// Ratings, one row per alternative, one column per criterion.
    pub decision_matrix: Vec<Vec<T>>,
    /// One weight per criterion.
    pub criteria_weights: Vec<T>,
}

impl<T> Contribution<T> {
    pub fn new(decision_matrix: Vec<Vec<T>>, criteria_weights: Vec<T>) -> Self {
        Self {
            decision_matrix,
            criteria_weights,
        }
    }

    pub fn num_alternatives(&self) -> usize {
        self.decision_matrix.len()
    }
}

/// Criteria directions plus the ordered list of contributions.
///
/// The number of criteria is fixed at construction. The number of
/// alternatives is fixed by the first contribution; every later one must
/// match it.
#[derive(Debug, Clone)]
pub struct RankingInput<T> {
    criteria: Vec<Criterion>,
    contributions: Vec<Contribution<T>>,
}

impl<T> RankingInput<T> {
    /// Creates an empty input model. Fails when no criteria are given.
    pub fn new(criteria_benefit_indicator: &[bool]) -> Result<Self> {
        if criteria_benefit_indicator.is_empty() {
            return Err(RankingError::NoCriteria);
        }
        Ok(Self {
            criteria: criteria_benefit_indicator
                .iter()
                .map(|&b| Criterion::from_benefit(b))
                .collect(),
            contributions: Vec::new(),
        })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn num_criteria(&self) -> usize {
        self.criteria.len()
    }

    /// Alternative count established by the first contribution.
    pub fn num_alternatives(&self) -> Option<usize> {
        self.contributions.first().map(Contribution::num_alternatives)
    }

    pub fn num_decision_makers(&self) -> usize {
        self.contributions.len()
    }

    pub fn contributions(&self) -> &[Contribution<T>] {
        &self.contributions
    }

    /// Direct access to the stored contributions.
    ///
    /// Edits made here bypass validation; evaluate with
    /// `validate_first = true` afterwards.
    pub fn contributions_mut(&mut self) -> &mut Vec<Contribution<T>> {
        &mut self.contributions
    }

    /// Validates and appends one contribution. Nothing changes on error.
    pub fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<T>>,
        criteria_weights: Vec<T>,
    ) -> Result<()> {
        let contribution = Contribution::new(decision_matrix, criteria_weights);
        self.check(&contribution, self.num_alternatives())?;
        self.contributions.push(contribution);
        Ok(())
    }

    /// Re-validates every stored contribution.
    pub fn validate(&self) -> Result<()> {
        let expected = self.num_alternatives();
        self.contributions
            .iter()
            .try_for_each(|c| self.check(c, expected))
    }

    fn check(&self, contribution: &Contribution<T>, expected_alternatives: Option<usize>) -> Result<()> {
        let num_criteria = self.num_criteria();
        if contribution.criteria_weights.len() != num_criteria {
            return Err(RankingError::CriteriaWeightsMismatch {
                expected: num_criteria,
                actual: contribution.criteria_weights.len(),
            });
        }
        if contribution.decision_matrix.is_empty() {
            return Err(RankingError::EmptyDecisionMatrix);
        }
        if let Some((row, alt)) = contribution
            .decision_matrix
            .iter()
            .enumerate()
            .find(|(_, alt)| alt.len() != num_criteria)
        {
            return Err(RankingError::CriteriaMismatch {
                row,
                expected: num_criteria,
                actual: alt.len(),
            });
        }
        if let Some(expected) = expected_alternatives {
            if contribution.num_alternatives() != expected {
                return Err(RankingError::AlternativesMismatch {
                    expected,
                    actual: contribution.num_alternatives(),
                });
            }
        }
        Ok(())
    }
}
