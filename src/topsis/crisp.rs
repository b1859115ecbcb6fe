//! Classic (crisp) TOPSIS.
//!
//! Same contract as the fuzzy engine with plain `f64` ratings and
//! weights. The pipeline is:
//!
//! 1. negate cost criteria so every column is maximized;
//! 2. divide each column by its Euclidean norm;
//! 3. divide weights by their sum;
//! 4. weight the matrix;
//! 5. ideal = column maximum, anti-ideal = column minimum;
//! 6. similarity `d⁻ / (d⁺ + d⁻)` with Euclidean distances.
//!
//! Reference: Hwang & Yoon (1981), "Multiple Attribute Decision Making".

use super::input::RankingInput;
use super::scoring::rank_descending;
use super::types::{Criterion, Ranker};
use crate::error::{RankingError, Result};
use tracing::debug;

/// Intermediate and final products of one crisp evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrispEvaluation {
    /// Vector-normalized matrix with cost columns negated.
    pub normalized_matrix: Vec<Vec<f64>>,

    /// Weights divided by their sum.
    pub normalized_weights: Vec<f64>,

    /// Weighted normalized matrix.
    pub weighted_matrix: Vec<Vec<f64>>,

    /// Column maxima of the weighted matrix.
    pub ideal: Vec<f64>,

    /// Column minima of the weighted matrix.
    pub anti_ideal: Vec<f64>,

    /// Euclidean distance to the ideal per alternative.
    pub ideal_distances: Vec<f64>,

    /// Euclidean distance to the anti-ideal per alternative.
    pub anti_ideal_distances: Vec<f64>,

    /// Relative closeness per alternative.
    pub similarity: Vec<f64>,

    /// Alternative indices, best first.
    pub ranking: Vec<usize>,
}

/// Crisp TOPSIS ranker.
///
/// Holds a single decision maker: adding another replaces the previous
/// contribution.
///
/// # Examples
///
/// ```
/// use u_mcdm::topsis::CrispTopsis;
///
/// let mut ranker = CrispTopsis::new(&[true, false, true]).unwrap();
/// ranker
///     .add_decision_maker(
///         vec![vec![5.0, 3.0, 5.0], vec![10.0, 5.0, 3.0]],
///         vec![1.0, 0.5, 0.5],
///     )
///     .unwrap();
/// assert_eq!(ranker.evaluate(true).unwrap(), vec![1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct CrispTopsis {
    input: RankingInput<f64>,
    evaluation: Option<CrispEvaluation>,
}

impl CrispTopsis {
    pub fn new(criteria_benefit_indicator: &[bool]) -> Result<Self> {
        Ok(Self {
            input: RankingInput::new(criteria_benefit_indicator)?,
            evaluation: None,
        })
    }

    pub fn criteria(&self) -> &[Criterion] {
        self.input.criteria()
    }

    pub fn input(&self) -> &RankingInput<f64> {
        &self.input
    }

    /// Sets the decision maker, replacing any previous one.
    pub fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<f64>>,
        criteria_weights: Vec<f64>,
    ) -> Result<()> {
        let previous = std::mem::take(self.input.contributions_mut());
        if let Err(err) = self
            .input
            .add_decision_maker(decision_matrix, criteria_weights)
        {
            *self.input.contributions_mut() = previous;
            return Err(err);
        }
        if !previous.is_empty() {
            debug!("crisp topsis decision maker replaced");
        }
        Ok(())
    }

    /// Runs the pipeline and returns the ranking, best first.
    pub fn evaluate(&mut self, validate_first: bool) -> Result<Vec<usize>> {
        self.evaluation = None;
        if validate_first {
            self.input.validate()?;
        }
        let evaluation = self.run()?;
        let ranking = evaluation.ranking.clone();
        self.evaluation = Some(evaluation);
        Ok(ranking)
    }

    /// Similarity scores of the last evaluation, by alternative.
    pub fn ranking_scores(&self) -> Option<&[f64]> {
        self.evaluation.as_ref().map(|e| e.similarity.as_slice())
    }

    pub fn evaluation(&self) -> Option<&CrispEvaluation> {
        self.evaluation.as_ref()
    }

    /// Runs the pipeline without touching ranker state.
    pub fn run(&self) -> Result<CrispEvaluation> {
        let contribution = self
            .input
            .contributions()
            .last()
            .ok_or(RankingError::NoDecisionMakers)?;
        let criteria = self.input.criteria();
        let matrix = &contribution.decision_matrix;
        let num_criteria = criteria.len();
        for (row, alt) in matrix.iter().enumerate() {
            if alt.len() != num_criteria {
                return Err(RankingError::CriteriaMismatch {
                    row,
                    expected: num_criteria,
                    actual: alt.len(),
                });
            }
        }
        if contribution.criteria_weights.len() != num_criteria {
            return Err(RankingError::CriteriaWeightsMismatch {
                expected: num_criteria,
                actual: contribution.criteria_weights.len(),
            });
        }
        debug!(
            alternatives = matrix.len(),
            criteria = num_criteria,
            "evaluating crisp topsis"
        );

        // negate minimized objectives, then vector-normalize each column
        let mut normalized_matrix: Vec<Vec<f64>> = matrix
            .iter()
            .map(|alt| {
                alt.iter()
                    .zip(criteria.iter())
                    .map(|(&v, c)| if c.is_benefit() { v } else { -v })
                    .collect()
            })
            .collect();
        for crit_j in 0..num_criteria {
            let norm = normalized_matrix
                .iter()
                .map(|alt| alt[crit_j].powi(2))
                .sum::<f64>()
                .sqrt();
            if norm == 0.0 || !norm.is_finite() {
                return Err(RankingError::DegenerateNormalization {
                    criterion: crit_j,
                    reference: norm,
                });
            }
            for alt in normalized_matrix.iter_mut() {
                alt[crit_j] /= norm;
            }
        }

        let weight_sum: f64 = contribution.criteria_weights.iter().sum();
        if weight_sum == 0.0 || !weight_sum.is_finite() {
            return Err(RankingError::DegenerateWeights { sum: weight_sum });
        }
        let normalized_weights: Vec<f64> = contribution
            .criteria_weights
            .iter()
            .map(|w| w / weight_sum)
            .collect();

        let weighted_matrix: Vec<Vec<f64>> = normalized_matrix
            .iter()
            .map(|alt| {
                alt.iter()
                    .zip(normalized_weights.iter())
                    .map(|(v, w)| v * w)
                    .collect()
            })
            .collect();

        let column = |j: usize| weighted_matrix.iter().map(move |alt| alt[j]);
        let ideal: Vec<f64> = (0..num_criteria)
            .map(|j| column(j).fold(f64::NEG_INFINITY, f64::max))
            .collect();
        let anti_ideal: Vec<f64> = (0..num_criteria)
            .map(|j| column(j).fold(f64::INFINITY, f64::min))
            .collect();

        let ideal_distances: Vec<f64> = weighted_matrix
            .iter()
            .map(|alt| euclidean(alt, &ideal))
            .collect();
        let anti_ideal_distances: Vec<f64> = weighted_matrix
            .iter()
            .map(|alt| euclidean(alt, &anti_ideal))
            .collect();

        let similarity = anti_ideal_distances
            .iter()
            .zip(ideal_distances.iter())
            .enumerate()
            .map(|(alternative, (&d_neg, &d_pos))| {
                let denominator = d_pos + d_neg;
                if denominator == 0.0 || !denominator.is_finite() {
                    return Err(RankingError::DegenerateCloseness { alternative });
                }
                Ok(d_neg / denominator)
            })
            .collect::<Result<Vec<f64>>>()?;
        let ranking = rank_descending(&similarity);
        debug!(?similarity, ?ranking, "crisp topsis evaluated");

        Ok(CrispEvaluation {
            normalized_matrix,
            normalized_weights,
            weighted_matrix,
            ideal,
            anti_ideal,
            ideal_distances,
            anti_ideal_distances,
            similarity,
            ranking,
        })
    }
}

impl Ranker for CrispTopsis {
    type Value = f64;

    fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<f64>>,
        criteria_weights: Vec<f64>,
    ) -> Result<()> {
        CrispTopsis::add_decision_maker(self, decision_matrix, criteria_weights)
    }

    fn evaluate(&mut self, validate_first: bool) -> Result<Vec<usize>> {
        CrispTopsis::evaluate(self, validate_first)
    }

    fn ranking_scores(&self) -> Option<&[f64]> {
        CrispTopsis::ranking_scores(self)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
