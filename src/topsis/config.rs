//! Fuzzy TOPSIS configuration.
//!
//! [`FuzzyTopsisConfig`] selects the built-in aggregation and ideal-point
//! policies. Custom strategies can still be swapped in on the engine
//! itself (see [`FuzzyTopsis::with_rating_aggregator`](super::FuzzyTopsis::with_rating_aggregator)).

use super::aggregation::{EnvelopeAggregator, FuzzyAggregator, MeanAggregator};

/// How decision makers' fuzzy numbers are combined into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AggregationPolicy {
    /// Component-wise mean (Chen, 2000).
    #[default]
    Mean,

    /// Minimum left, mean middle, maximum right.
    ///
    /// Widens the support to the most pessimistic and most optimistic
    /// judgement while averaging the most plausible value.
    Envelope,
}

impl AggregationPolicy {
    /// Returns the built-in aggregator for this policy.
    pub fn aggregator(self) -> Box<dyn FuzzyAggregator> {
        match self {
            AggregationPolicy::Mean => Box::new(MeanAggregator),
            AggregationPolicy::Envelope => Box::new(EnvelopeAggregator),
        }
    }
}

/// How the fuzzy positive and negative ideal solutions are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdealPolicy {
    /// FPIS `(1, 1, 1)` and FNIS `(0, 0, 0)` for every criterion (Chen).
    #[default]
    Fixed,

    /// Best and worst observed alternative per criterion (Yuen).
    ///
    /// Distances are measured against the selected alternative's own
    /// weighted rating.
    Empirical,
}

/// Configuration for the fuzzy TOPSIS engine.
///
/// # Presets
///
/// ```
/// use u_mcdm::topsis::{AggregationPolicy, FuzzyTopsisConfig, IdealPolicy};
///
/// let chen = FuzzyTopsisConfig::chen();
/// assert_eq!(chen.rating_aggregation, AggregationPolicy::Mean);
/// assert_eq!(chen.ideal, IdealPolicy::Fixed);
///
/// let yuen = FuzzyTopsisConfig::yuen();
/// assert_eq!(yuen.weight_aggregation, AggregationPolicy::Envelope);
/// assert_eq!(yuen.ideal, IdealPolicy::Empirical);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FuzzyTopsisConfig {
    /// Policy for aggregating alternative ratings.
    pub rating_aggregation: AggregationPolicy,

    /// Policy for aggregating criteria weights.
    pub weight_aggregation: AggregationPolicy,

    /// Ideal-point policy.
    pub ideal: IdealPolicy,

    /// Whether to compute per-alternative distances in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to the sequential path.
    pub parallel: bool,
}

impl Default for FuzzyTopsisConfig {
    fn default() -> Self {
        Self::chen()
    }
}

impl FuzzyTopsisConfig {
    /// Chen (2000): mean aggregation, fixed ideals.
    pub fn chen() -> Self {
        Self {
            rating_aggregation: AggregationPolicy::Mean,
            weight_aggregation: AggregationPolicy::Mean,
            ideal: IdealPolicy::Fixed,
            parallel: false,
        }
    }

    /// Yuen-style variant: envelope aggregation, empirical ideals.
    pub fn yuen() -> Self {
        Self {
            rating_aggregation: AggregationPolicy::Envelope,
            weight_aggregation: AggregationPolicy::Envelope,
            ideal: IdealPolicy::Empirical,
            parallel: false,
        }
    }

    /// Sets the same aggregation policy for ratings and weights.
    pub fn with_aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.rating_aggregation = policy;
        self.weight_aggregation = policy;
        self
    }

    pub fn with_rating_aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.rating_aggregation = policy;
        self
    }

    pub fn with_weight_aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.weight_aggregation = policy;
        self
    }

    pub fn with_ideal(mut self, ideal: IdealPolicy) -> Self {
        self.ideal = ideal;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
