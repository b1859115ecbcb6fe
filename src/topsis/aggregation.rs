//! Group aggregation of fuzzy ratings and weights.

use super::input::Contribution;
use crate::error::{RankingError, Result};
use crate::fuzzy::Tfn;

/// Combines several decision makers' fuzzy numbers into one.
///
/// Called once per (alternative, criterion) cell for ratings and once per
/// criterion for weights. `values` holds one entry per decision maker, in
/// contribution order, and is never empty.
///
/// # Examples
///
/// ```
/// use u_mcdm::fuzzy::Tfn;
/// use u_mcdm::topsis::FuzzyAggregator;
///
/// /// Takes the most pessimistic judgement.
/// struct Pessimist;
///
/// impl FuzzyAggregator for Pessimist {
///     fn name(&self) -> &str { "Pessimist" }
///     fn aggregate(&self, values: &[Tfn]) -> u_mcdm::Result<Tfn> {
///         let worst = values
///             .iter()
///             .min_by(|a, b| a.middle().total_cmp(&b.middle()))
///             .copied()
///             .unwrap_or(Tfn::ZERO);
///         Ok(worst)
///     }
/// }
/// ```
pub trait FuzzyAggregator: Send + Sync {
    /// Returns the name of this aggregator.
    fn name(&self) -> &str;

    /// Aggregates one fuzzy number per decision maker.
    fn aggregate(&self, values: &[Tfn]) -> Result<Tfn>;
}

/// Component-wise arithmetic mean.
///
/// Reference: Chen (2000).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAggregator;

impl FuzzyAggregator for MeanAggregator {
    fn name(&self) -> &str {
        "Mean"
    }

    fn aggregate(&self, values: &[Tfn]) -> Result<Tfn> {
        if values.is_empty() {
            return Err(RankingError::NoDecisionMakers);
        }
        let n = values.len() as f64;
        let (l, m, r) = values.iter().fold((0.0, 0.0, 0.0), |(l, m, r), v| {
            (l + v.left(), m + v.middle(), r + v.right())
        });
        Tfn::new(l / n, m / n, r / n)
    }
}

/// Minimum left, mean middle, maximum right.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeAggregator;

impl FuzzyAggregator for EnvelopeAggregator {
    fn name(&self) -> &str {
        "Envelope"
    }

    fn aggregate(&self, values: &[Tfn]) -> Result<Tfn> {
        if values.is_empty() {
            return Err(RankingError::NoDecisionMakers);
        }
        let n = values.len() as f64;
        let (l, m, r) = values.iter().fold(
            (f64::INFINITY, 0.0, f64::NEG_INFINITY),
            |(l, m, r), v| (l.min(v.left()), m + v.middle(), r.max(v.right())),
        );
        Tfn::new(l, m / n, r)
    }
}

/// Aggregates every (alternative, criterion) cell across contributions.
///
/// Shapes are read with checked access so that unvalidated input fails
/// with a shape error instead of panicking.
pub(crate) fn aggregate_ratings(
    contributions: &[Contribution<Tfn>],
    num_alternatives: usize,
    num_criteria: usize,
    aggregator: &dyn FuzzyAggregator,
) -> Result<Vec<Vec<Tfn>>> {
    let mut cell = Vec::with_capacity(contributions.len());
    (0..num_alternatives)
        .map(|alt_i| {
            (0..num_criteria)
                .map(|crit_j| {
                    cell.clear();
                    for c in contributions {
                        cell.push(rating_at(c, alt_i, crit_j, num_alternatives, num_criteria)?);
                    }
                    aggregator.aggregate(&cell)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Aggregates criteria weights across contributions.
pub(crate) fn aggregate_weights(
    contributions: &[Contribution<Tfn>],
    num_criteria: usize,
    aggregator: &dyn FuzzyAggregator,
) -> Result<Vec<Tfn>> {
    (0..num_criteria)
        .map(|crit_j| {
            let column = contributions
                .iter()
                .map(|c| {
                    c.criteria_weights.get(crit_j).copied().ok_or(
                        RankingError::CriteriaWeightsMismatch {
                            expected: num_criteria,
                            actual: c.criteria_weights.len(),
                        },
                    )
                })
                .collect::<Result<Vec<_>>>()?;
            aggregator.aggregate(&column)
        })
        .collect()
}

fn rating_at(
    contribution: &Contribution<Tfn>,
    alt_i: usize,
    crit_j: usize,
    num_alternatives: usize,
    num_criteria: usize,
) -> Result<Tfn> {
    let row = contribution
        .decision_matrix
        .get(alt_i)
        .ok_or(RankingError::AlternativesMismatch {
            expected: num_alternatives,
            actual: contribution.num_alternatives(),
        })?;
    row.get(crit_j)
        .copied()
        .ok_or(RankingError::CriteriaMismatch {
            row: alt_i,
            expected: num_criteria,
            actual: row.len(),
        })
}
