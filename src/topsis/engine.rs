//! Group fuzzy TOPSIS engine.

use super::aggregation::{aggregate_ratings, aggregate_weights, FuzzyAggregator};
use super::config::{FuzzyTopsisConfig, IdealPolicy};
use super::distance::{distances, Distances};
use super::ideal::IdealSolution;
use super::input::{Contribution, RankingInput};
use super::normalization::{normalize_matrix, weight_matrix, FuzzyNormalizer, LinearScaleNormalizer};
use super::scoring::{closeness_coefficients, rank_descending};
use super::types::{Criterion, Ranker};
use crate::error::{RankingError, Result};
use crate::fuzzy::Tfn;
use tracing::{debug, trace};

/// Intermediate and final products of one evaluation.
///
/// Matrices are indexed `[alternative][criterion]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Aggregated fuzzy decision matrix.
    pub aggregated_matrix: Vec<Vec<Tfn>>,

    /// Aggregated fuzzy weight per criterion.
    pub aggregated_weights: Vec<Tfn>,

    /// Normalized fuzzy decision matrix.
    pub normalized_matrix: Vec<Vec<Tfn>>,

    /// Weighted normalized fuzzy decision matrix.
    pub weighted_matrix: Vec<Vec<Tfn>>,

    /// FPIS and FNIS.
    pub ideal: IdealSolution,

    /// Distances to FPIS and FNIS.
    pub distances: Distances,

    /// Closeness coefficient per alternative.
    pub closeness: Vec<f64>,

    /// Alternative indices, best first.
    pub ranking: Vec<usize>,
}

/// Fuzzy TOPSIS for group decision making.
///
/// Aggregates every decision maker's fuzzy ratings and weights, then
/// ranks alternatives by their relative closeness to the ideal solutions.
///
/// # Examples
///
/// ```
/// use u_mcdm::fuzzy::{LinguisticRating as R, LinguisticWeight as W};
/// use u_mcdm::topsis::{FuzzyTopsis, FuzzyTopsisConfig};
///
/// // throughput (benefit), energy consumption (cost)
/// let mut ranker = FuzzyTopsis::new(&[true, false], FuzzyTopsisConfig::chen()).unwrap();
/// ranker
///     .add_decision_maker(
///         vec![
///             vec![R::Medium.fuzzy(), R::Poor.fuzzy()],
///             vec![R::VeryGood.fuzzy(), R::Poor.fuzzy()],
///         ],
///         vec![W::High.fuzzy(), W::Medium.fuzzy()],
///     )
///     .unwrap();
///
/// let ranking = ranker.evaluate(true).unwrap();
/// assert_eq!(ranking, vec![1, 0]);
/// assert_eq!(ranker.ranking_scores().unwrap().len(), 2);
/// ```
///
/// # References
///
/// - Chen (2000), "Extensions of the TOPSIS for group decision-making
///   under fuzzy environment", Fuzzy Sets and Systems 114(1).
/// - Yuen (2013), "Fuzzy cognitive network process: comparisons with
///   fuzzy analytic hierarchy process in new product development
///   strategy" (empirical ideal selection).
pub struct FuzzyTopsis {
    input: RankingInput<Tfn>,
    rating_aggregator: Box<dyn FuzzyAggregator>,
    weight_aggregator: Box<dyn FuzzyAggregator>,
    normalizer: Box<dyn FuzzyNormalizer>,
    ideal: IdealPolicy,
    parallel: bool,
    evaluation: Option<Evaluation>,
}

impl FuzzyTopsis {
    /// Creates an engine for criteria with the given benefit indicators
    /// (`true` = benefit, `false` = cost).
    pub fn new(criteria_benefit_indicator: &[bool], config: FuzzyTopsisConfig) -> Result<Self> {
        Ok(Self {
            input: RankingInput::new(criteria_benefit_indicator)?,
            rating_aggregator: config.rating_aggregation.aggregator(),
            weight_aggregator: config.weight_aggregation.aggregator(),
            normalizer: Box::new(LinearScaleNormalizer),
            ideal: config.ideal,
            parallel: config.parallel,
            evaluation: None,
        })
    }

    /// Chen's method: mean aggregation, fixed ideals.
    pub fn chen(criteria_benefit_indicator: &[bool]) -> Result<Self> {
        Self::new(criteria_benefit_indicator, FuzzyTopsisConfig::chen())
    }

    /// Envelope aggregation with empirical ideals.
    pub fn yuen(criteria_benefit_indicator: &[bool]) -> Result<Self> {
        Self::new(criteria_benefit_indicator, FuzzyTopsisConfig::yuen())
    }

    /// Replaces the aggregator used for alternative ratings.
    pub fn with_rating_aggregator<A: FuzzyAggregator + 'static>(mut self, aggregator: A) -> Self {
        self.rating_aggregator = Box::new(aggregator);
        self
    }

    /// Replaces the aggregator used for criteria weights.
    pub fn with_weight_aggregator<A: FuzzyAggregator + 'static>(mut self, aggregator: A) -> Self {
        self.weight_aggregator = Box::new(aggregator);
        self
    }

    /// Replaces the normalizer.
    pub fn with_normalizer<N: FuzzyNormalizer + 'static>(mut self, normalizer: N) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        self.input.criteria()
    }

    pub fn ideal_policy(&self) -> IdealPolicy {
        self.ideal
    }

    pub fn input(&self) -> &RankingInput<Tfn> {
        &self.input
    }

    /// Direct access to the stored contributions; see
    /// [`RankingInput::contributions_mut`].
    pub fn contributions_mut(&mut self) -> &mut Vec<Contribution<Tfn>> {
        self.input.contributions_mut()
    }

    /// Appends one decision maker's fuzzy decision matrix and weights.
    pub fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<Tfn>>,
        criteria_weights: Vec<Tfn>,
    ) -> Result<()> {
        self.input
            .add_decision_maker(decision_matrix, criteria_weights)
    }

    /// Runs every stage and returns the ranking, best first.
    ///
    /// The previous evaluation is replaced on success and dropped on
    /// failure.
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

    /// Closeness coefficients of the last evaluation, by alternative.
    pub fn ranking_scores(&self) -> Option<&[f64]> {
        self.evaluation.as_ref().map(|e| e.closeness.as_slice())
    }

    /// All intermediate products of the last evaluation.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Runs the pipeline without touching engine state.
    pub fn run(&self) -> Result<Evaluation> {
        let num_alternatives = self
            .input
            .num_alternatives()
            .ok_or(RankingError::NoDecisionMakers)?;
        let num_criteria = self.input.num_criteria();
        let contributions = self.input.contributions();
        debug!(
            alternatives = num_alternatives,
            criteria = num_criteria,
            decision_makers = contributions.len(),
            ideal = ?self.ideal,
            "evaluating fuzzy topsis"
        );

        let aggregated_matrix = aggregate_ratings(
            contributions,
            num_alternatives,
            num_criteria,
            self.rating_aggregator.as_ref(),
        )?;
        let aggregated_weights =
            aggregate_weights(contributions, num_criteria, self.weight_aggregator.as_ref())?;
        trace!(
            ratings = self.rating_aggregator.name(),
            weights = self.weight_aggregator.name(),
            "aggregated"
        );

        let normalized_matrix =
            normalize_matrix(&aggregated_matrix, self.criteria(), self.normalizer.as_ref())?;
        let weighted_matrix = weight_matrix(&normalized_matrix, &aggregated_weights)?;
        trace!(normalizer = self.normalizer.name(), "normalized and weighted");

        let ideal = self.ideal.select(&weighted_matrix, num_criteria);
        trace!(?ideal, "ideal solutions");

        let distances = distances(&weighted_matrix, &ideal, self.parallel);
        let closeness = closeness_coefficients(&distances.positive, &distances.negative)?;
        let ranking = rank_descending(&closeness);
        debug!(?closeness, ?ranking, "fuzzy topsis evaluated");

        Ok(Evaluation {
            aggregated_matrix,
            aggregated_weights,
            normalized_matrix,
            weighted_matrix,
            ideal,
            distances,
            closeness,
            ranking,
        })
    }
}

impl Ranker for FuzzyTopsis {
    type Value = Tfn;

    fn add_decision_maker(
        &mut self,
        decision_matrix: Vec<Vec<Tfn>>,
        criteria_weights: Vec<Tfn>,
    ) -> Result<()> {
        FuzzyTopsis::add_decision_maker(self, decision_matrix, criteria_weights)
    }

    fn evaluate(&mut self, validate_first: bool) -> Result<Vec<usize>> {
        FuzzyTopsis::evaluate(self, validate_first)
    }

    fn ranking_scores(&self) -> Option<&[f64]> {
        FuzzyTopsis::ranking_scores(self)
    }
}

impl std::fmt::Debug for FuzzyTopsis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyTopsis")
            .field("criteria", &self.input.criteria())
            .field("decision_makers", &self.input.num_decision_makers())
            .field("rating_aggregator", &self.rating_aggregator.name())
            .field("weight_aggregator", &self.weight_aggregator.name())
            .field("normalizer", &self.normalizer.name())
            .field("ideal", &self.ideal)
            .finish()
    }
}
