//! Error type shared by every ranker in the crate.

use thiserror::Error;

/// Errors raised while building inputs or evaluating a ranking.
///
/// Every failure is deterministic: evaluation is a pure function of the
/// accumulated contributions, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("at least one criterion is required")]
    NoCriteria,

    #[error("no decision makers have been added")]
    NoDecisionMakers,

    #[error("decision matrix has no alternatives")]
    EmptyDecisionMatrix,

    #[error("invalid number of criteria in decision matrix row {row}: {actual} != {expected}")]
    CriteriaMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid number of criteria in criteria weights: {actual} != {expected}")]
    CriteriaWeightsMismatch { expected: usize, actual: usize },

    #[error("invalid number of alternatives in decision matrix: {actual} != {expected}")]
    AlternativesMismatch { expected: usize, actual: usize },

    #[error("invalid triangular fuzzy number ({left}, {middle}, {right}): {reason}")]
    InvalidFuzzyNumber {
        left: f64,
        middle: f64,
        right: f64,
        reason: &'static str,
    },

    #[error("criterion {criterion} cannot be normalized against reference {reference}")]
    DegenerateNormalization { criterion: usize, reference: f64 },

    #[error("criteria weights sum to {sum} and cannot be normalized")]
    DegenerateWeights { sum: f64 },

    #[error("alternative {alternative} has an undefined closeness coefficient")]
    DegenerateCloseness { alternative: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("missing value for criterion '{0}'")]
    MissingCriterion(String),
}

impl RankingError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        RankingError::InvalidConfig(reason.into())
    }

    /// Returns true for errors caused by inconsistent input shapes.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            RankingError::EmptyDecisionMatrix
                | RankingError::CriteriaMismatch { .. }
                | RankingError::CriteriaWeightsMismatch { .. }
                | RankingError::AlternativesMismatch { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RankingError>;
