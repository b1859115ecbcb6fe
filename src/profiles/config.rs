//! Registry configuration.

use crate::error::{RankingError, Result};
use crate::topsis::FuzzyTopsisConfig;

/// Which fuzzy TOPSIS variant ranks the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RankerKind {
    /// Mean aggregation with fixed ideals.
    #[default]
    Chen,

    /// Envelope aggregation with empirical ideals.
    Yuen,
}

impl RankerKind {
    /// Engine configuration for this variant.
    pub fn config(self) -> FuzzyTopsisConfig {
        match self {
            RankerKind::Chen => FuzzyTopsisConfig::chen(),
            RankerKind::Yuen => FuzzyTopsisConfig::yuen(),
        }
    }
}

/// A named criterion and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionSpec {
    pub name: String,

    /// `true` when larger ratings are better.
    pub benefit: bool,
}

impl CriterionSpec {
    pub fn new(name: impl Into<String>, benefit: bool) -> Self {
        Self {
            name: name.into(),
            benefit,
        }
    }
}

/// Configuration for a [`WorkerRankingRegistry`](super::WorkerRankingRegistry).
///
/// The order of `criteria` fixes the column order of every decision
/// matrix and weight vector built from events.
///
/// # Examples
///
/// ```
/// use u_mcdm::profiles::{RankerKind, RegistryConfig};
///
/// let config = RegistryConfig::default()
///     .with_ranker(RankerKind::Yuen)
///     .with_criterion("throughput", true)
///     .with_criterion("energy_consumption", false)
///     .with_criterion("accuracy", true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    pub ranker: RankerKind,
    pub criteria: Vec<CriterionSpec>,
}

impl RegistryConfig {
    pub fn with_ranker(mut self, ranker: RankerKind) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_criterion(mut self, name: impl Into<String>, benefit: bool) -> Self {
        self.criteria.push(CriterionSpec::new(name, benefit));
        self
    }

    /// Benefit indicators in criterion order.
    pub fn benefit_indicators(&self) -> Vec<bool> {
        self.criteria.iter().map(|c| c.benefit).collect()
    }

    /// Position of a criterion by name.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.criteria.is_empty() {
            return Err(RankingError::NoCriteria);
        }
        for (i, criterion) in self.criteria.iter().enumerate() {
            if criterion.name.is_empty() {
                return Err(RankingError::invalid_config(format!(
                    "criterion {i} has an empty name"
                )));
            }
            if self.criteria[..i].iter().any(|c| c.name == criterion.name) {
                return Err(RankingError::invalid_config(format!(
                    "duplicate criterion '{}'",
                    criterion.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topsis::IdealPolicy;

    #[test]
    fn test_default_is_chen_without_criteria() {
        let config = RegistryConfig::default();
        assert_eq!(config.ranker, RankerKind::Chen);
        assert_eq!(config.validate(), Err(RankingError::NoCriteria));
    }

    #[test]
    fn test_ranker_kind_maps_to_presets() {
        assert_eq!(RankerKind::Chen.config().ideal, IdealPolicy::Fixed);
        assert_eq!(RankerKind::Yuen.config().ideal, IdealPolicy::Empirical);
    }

    #[test]
    fn test_benefit_indicators_follow_order() {
        let config = RegistryConfig::default()
            .with_criterion("throughput", true)
            .with_criterion("energy_consumption", false);
        assert_eq!(config.benefit_indicators(), vec![true, false]);
        assert_eq!(config.criterion_index("energy_consumption"), Some(1));
        assert_eq!(config.criterion_index("latency"), None);
    }

    #[test]
    fn test_validate_duplicate_name() {
        let config = RegistryConfig::default()
            .with_criterion("accuracy", true)
            .with_criterion("accuracy", false);
        assert!(matches!(
            config.validate(),
            Err(RankingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_empty_name() {
        let config = RegistryConfig::default().with_criterion("", true);
        assert!(config.validate().is_err());
    }
}
