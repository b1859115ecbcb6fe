//! Registry events and ranked output.

use std::collections::BTreeMap;

use crate::fuzzy::Tfn;

/// A worker rated on every configured criterion.
///
/// Each worker is one alternative of its service type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatedWorker {
    pub service_type: String,

    /// Unique worker key within its service type.
    pub stream_key: String,

    /// Rating per criterion name.
    pub ratings: BTreeMap<String, Tfn>,
}

impl RatedWorker {
    pub fn new(service_type: impl Into<String>, stream_key: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            stream_key: stream_key.into(),
            ratings: BTreeMap::new(),
        }
    }

    pub fn with_rating(mut self, criterion: impl Into<String>, rating: impl Into<Tfn>) -> Self {
        self.ratings.insert(criterion.into(), rating.into());
        self
    }
}

/// A query's criteria weights for the services it needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriteriaRanked {
    pub query_id: String,
    pub required_services: Vec<String>,

    /// Weight per criterion name.
    pub weights: BTreeMap<String, Tfn>,
}

impl CriteriaRanked {
    pub fn new(query_id: impl Into<String>) -> Self {
        Self {
            query_id: query_id.into(),
            required_services: Vec::new(),
            weights: BTreeMap::new(),
        }
    }

    pub fn with_service(mut self, service_type: impl Into<String>) -> Self {
        self.required_services.push(service_type.into());
        self
    }

    pub fn with_weight(mut self, criterion: impl Into<String>, weight: impl Into<Tfn>) -> Self {
        self.weights.insert(criterion.into(), weight.into());
        self
    }
}

/// A distinct weight vector of one service type and its current ranking.
///
/// Queries that share the same weights share one profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedProfile {
    /// `"{service_type}-{w_1}-...-{w_n}"`.
    pub id: String,

    /// Queries attached to this profile, in arrival order.
    pub query_ids: Vec<String>,

    /// Weights in criterion order.
    pub criteria_weights: Vec<Tfn>,

    /// Worker keys in alternative order.
    pub alternative_ids: Vec<String>,

    /// Alternative indices, best first.
    pub ranking_index: Vec<usize>,

    /// Closeness coefficient per alternative.
    pub ranking_scores: Vec<f64>,
}

impl RankedProfile {
    /// Worker keys ordered best first.
    pub fn ranked_alternatives(&self) -> Vec<&str> {
        self.ranking_index
            .iter()
            .filter_map(|&i| self.alternative_ids.get(i))
            .map(String::as_str)
            .collect()
    }
}

/// Every profile of a service type after re-ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilesRanked {
    pub service_type: String,
    pub profiles: Vec<RankedProfile>,
}

/// Builds the profile id from a service type and ordered weights.
pub fn profile_id(service_type: &str, weights: &[Tfn]) -> String {
    let mut id = String::from(service_type);
    for weight in weights {
        id.push('-');
        id.push_str(&weight.to_string());
    }
    id
}
