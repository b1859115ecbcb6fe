//! Worker ranking registry.
//!
//! Accumulates rated workers per service type and the distinct criteria
//! weights requested by queries, and keeps a fuzzy TOPSIS ranking of the
//! workers for every (service type, weights) profile.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use super::config::RegistryConfig;
use super::types::{profile_id, CriteriaRanked, ProfilesRanked, RankedProfile, RatedWorker};
use crate::error::{RankingError, Result};
use crate::fuzzy::Tfn;
use crate::topsis::FuzzyTopsis;

#[derive(Debug, Clone, Default)]
struct ServiceState {
    alternative_ids: Vec<String>,
    decision_matrix: Vec<Vec<Tfn>>,
    profiles: Vec<RankedProfile>,
}

impl ServiceState {
    fn has_profile(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }

    fn published(&self, service_type: &str) -> Option<ProfilesRanked> {
        if self.profiles.is_empty() {
            return None;
        }
        Some(ProfilesRanked {
            service_type: service_type.to_string(),
            profiles: self.profiles.clone(),
        })
    }
}

/// Registry of rated workers and ranked profiles.
///
/// Every event is applied atomically: when ranking fails the registry
/// is left exactly as it was before the event.
///
/// # Examples
///
/// ```
/// use u_mcdm::fuzzy::{LinguisticRating as R, LinguisticWeight as W};
/// use u_mcdm::profiles::{CriteriaRanked, RatedWorker, RegistryConfig, WorkerRankingRegistry};
///
/// let config = RegistryConfig::default()
///     .with_criterion("throughput", true)
///     .with_criterion("energy_consumption", false);
/// let mut registry = WorkerRankingRegistry::new(config).unwrap();
///
/// for (key, throughput, energy) in [("w1", R::Medium, R::Poor), ("w2", R::VeryGood, R::Poor)] {
///     let worker = RatedWorker::new("detector", key)
///         .with_rating("throughput", throughput)
///         .with_rating("energy_consumption", energy);
///     registry.worker_rated(worker).unwrap();
/// }
///
/// let query = CriteriaRanked::new("q1")
///     .with_service("detector")
///     .with_weight("throughput", W::High)
///     .with_weight("energy_consumption", W::Medium);
/// let published = registry.criteria_ranked(query).unwrap();
/// assert_eq!(published[0].profiles[0].ranked_alternatives(), vec!["w2", "w1"]);
/// ```
#[derive(Debug, Clone)]
pub struct WorkerRankingRegistry {
    config: RegistryConfig,
    benefit: Vec<bool>,
    services: HashMap<String, ServiceState>,
    query_profiles: HashMap<String, BTreeSet<String>>,
}

impl WorkerRankingRegistry {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            benefit: config.benefit_indicators(),
            config,
            services: HashMap::new(),
            query_profiles: HashMap::new(),
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Worker keys of a service type in alternative order.
    pub fn alternative_ids(&self, service_type: &str) -> &[String] {
        self.services
            .get(service_type)
            .map_or(&[][..], |s| s.alternative_ids.as_slice())
    }

    /// Current profiles of a service type in creation order.
    pub fn profiles(&self, service_type: &str) -> &[RankedProfile] {
        self.services
            .get(service_type)
            .map_or(&[][..], |s| s.profiles.as_slice())
    }

    /// Profile ids a query is attached to.
    pub fn query_profiles(&self, query_id: &str) -> Option<&BTreeSet<String>> {
        self.query_profiles.get(query_id)
    }

    /// Adds a worker as a new alternative of its service type.
    ///
    /// Every profile of the service type is re-ranked. Returns the
    /// re-ranked profiles, or `None` when the service type has no
    /// profiles yet or the worker's stream key is already known.
    pub fn worker_rated(&mut self, worker: RatedWorker) -> Result<Option<ProfilesRanked>> {
        let row = self.ordered(&worker.ratings)?;
        let service = self.services.get(&worker.service_type);
        if service.is_some_and(|s| s.alternative_ids.contains(&worker.stream_key)) {
            warn!(
                service_type = %worker.service_type,
                stream_key = %worker.stream_key,
                "duplicate rated worker ignored"
            );
            return Ok(None);
        }

        let mut decision_matrix = service
            .map(|s| s.decision_matrix.clone())
            .unwrap_or_default();
        decision_matrix.push(row);
        let rankings = service
            .map_or(&[][..], |s| s.profiles.as_slice())
            .iter()
            .map(|p| self.rank(&decision_matrix, &p.criteria_weights))
            .collect::<Result<Vec<_>>>()?;

        let state = self
            .services
            .entry(worker.service_type.clone())
            .or_default();
        state.alternative_ids.push(worker.stream_key);
        state.decision_matrix = decision_matrix;
        for (profile, (ranking_index, ranking_scores)) in state.profiles.iter_mut().zip(rankings) {
            profile.alternative_ids = state.alternative_ids.clone();
            profile.ranking_index = ranking_index;
            profile.ranking_scores = ranking_scores;
        }
        debug!(
            service_type = %worker.service_type,
            alternatives = state.alternative_ids.len(),
            profiles = state.profiles.len(),
            "worker added"
        );
        Ok(state.published(&worker.service_type))
    }

    /// Attaches a query to one profile per required service type.
    ///
    /// Queries with identical weights share a profile. Creating a profile
    /// ranks it and publishes its service type; attaching to an existing
    /// profile publishes nothing.
    pub fn criteria_ranked(&mut self, event: CriteriaRanked) -> Result<Vec<ProfilesRanked>> {
        if self.query_profiles.contains_key(&event.query_id) {
            warn!(query_id = %event.query_id, "duplicate query ignored");
            return Ok(Vec::new());
        }
        let weights = self.ordered(&event.weights)?;

        let mut planned: Vec<(&String, String, Option<(Vec<usize>, Vec<f64>)>)> = Vec::new();
        for service_type in &event.required_services {
            if planned.iter().any(|(s, _, _)| *s == service_type) {
                continue;
            }
            let id = profile_id(service_type, &weights);
            let ranking = match self.services.get(service_type) {
                Some(state) if state.has_profile(&id) => None,
                Some(state) => Some(self.rank(&state.decision_matrix, &weights)?),
                None => Some(self.rank(&[], &weights)?),
            };
            planned.push((service_type, id, ranking));
        }

        let mut published = Vec::new();
        let attached = self
            .query_profiles
            .entry(event.query_id.clone())
            .or_default();
        for (service_type, id, ranking) in planned {
            let state = self.services.entry(service_type.clone()).or_default();
            match ranking {
                None => {
                    if let Some(profile) = state.profiles.iter_mut().find(|p| p.id == id) {
                        profile.query_ids.push(event.query_id.clone());
                    }
                }
                Some((ranking_index, ranking_scores)) => {
                    debug!(service_type = %service_type, profile = %id, "profile created");
                    state.profiles.push(RankedProfile {
                        id: id.clone(),
                        query_ids: vec![event.query_id.clone()],
                        criteria_weights: weights.clone(),
                        alternative_ids: state.alternative_ids.clone(),
                        ranking_index,
                        ranking_scores,
                    });
                    published.extend(state.published(service_type));
                }
            }
            attached.insert(id);
        }
        Ok(published)
    }

    /// Orders named values by the configured criteria.
    fn ordered(&self, values: &BTreeMap<String, Tfn>) -> Result<Vec<Tfn>> {
        if let Some(name) = values
            .keys()
            .find(|name| self.config.criterion_index(name).is_none())
        {
            return Err(RankingError::UnknownCriterion(name.clone()));
        }
        self.config
            .criteria
            .iter()
            .map(|c| {
                values
                    .get(&c.name)
                    .copied()
                    .ok_or_else(|| RankingError::MissingCriterion(c.name.clone()))
            })
            .collect()
    }

    /// Ranks a service's alternatives against one weight vector.
    fn rank(&self, decision_matrix: &[Vec<Tfn>], weights: &[Tfn]) -> Result<(Vec<usize>, Vec<f64>)> {
        match decision_matrix.len() {
            0 => return Ok((Vec::new(), Vec::new())),
            1 => return Ok((vec![0], vec![0.0])),
            _ => {}
        }
        let mut engine = FuzzyTopsis::new(&self.benefit, self.config.ranker.config())?;
        engine.add_decision_maker(decision_matrix.to_vec(), weights.to_vec())?;
        let ranking_index = engine.evaluate(true)?;
        let ranking_scores = engine
            .ranking_scores()
            .map(<[f64]>::to_vec)
            .unwrap_or_default();
        Ok((ranking_index, ranking_scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::{LinguisticRating as R, LinguisticWeight as W};
    use crate::profiles::RankerKind;

    fn config() -> RegistryConfig {
        RegistryConfig::default()
            .with_criterion("throughput", true)
            .with_criterion("energy_consumption", false)
            .with_criterion("accuracy", true)
    }

    fn worker(key: &str, ratings: [R; 3]) -> RatedWorker {
        RatedWorker::new("detector", key)
            .with_rating("throughput", ratings[0])
            .with_rating("energy_consumption", ratings[1])
            .with_rating("accuracy", ratings[2])
    }

    fn query(id: &str, weights: [W; 3]) -> CriteriaRanked {
        CriteriaRanked::new(id)
            .with_service("detector")
            .with_weight("throughput", weights[0])
            .with_weight("energy_consumption", weights[1])
            .with_weight("accuracy", weights[2])
    }

    fn registry_with_two_workers() -> WorkerRankingRegistry {
        let mut registry = WorkerRankingRegistry::new(config()).unwrap();
        registry
            .worker_rated(worker("w1", [R::VeryGood, R::Medium, R::Poor]))
            .unwrap();
        registry
            .worker_rated(worker("w2", [R::Medium, R::Poor, R::Medium]))
            .unwrap();
        registry
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(WorkerRankingRegistry::new(RegistryConfig::default()).is_err());
    }

    #[test]
    fn test_worker_without_profiles_publishes_nothing() {
        let mut registry = WorkerRankingRegistry::new(config()).unwrap();
        let out = registry
            .worker_rated(worker("w1", [R::Good, R::Good, R::Good]))
            .unwrap();
        assert!(out.is_none());
        assert_eq!(registry.alternative_ids("detector"), ["w1"]);
    }

    #[test]
    fn test_new_profile_is_ranked() {
        let mut registry = registry_with_two_workers();
        let out = registry
            .criteria_ranked(query("q1", [W::High, W::Medium, W::Medium]))
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].service_type, "detector");

        let profile = &out[0].profiles[0];
        assert_eq!(profile.query_ids, vec!["q1"]);
        assert_eq!(profile.alternative_ids, vec!["w1", "w2"]);
        assert_eq!(profile.ranking_index, vec![0, 1]);
        assert!((profile.ranking_scores[0] - 0.413974).abs() < 1e-4);
        assert!((profile.ranking_scores[1] - 0.409755).abs() < 1e-4);
        assert_eq!(
            profile.id,
            "detector-(0.7, 0.9, 1)-(0.3, 0.5, 0.7)-(0.3, 0.5, 0.7)"
        );
    }

    #[test]
    fn test_shared_weights_share_profile() {
        let mut registry = registry_with_two_workers();
        registry
            .criteria_ranked(query("q1", [W::High, W::Medium, W::Medium]))
            .unwrap();
        let out = registry
            .criteria_ranked(query("q2", [W::High, W::Medium, W::Medium]))
            .unwrap();
        assert!(out.is_empty());

        let profiles = registry.profiles("detector");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].query_ids, vec!["q1", "q2"]);
        assert!(registry
            .query_profiles("q2")
            .unwrap()
            .contains(&profiles[0].id));
    }

    #[test]
    fn test_new_worker_reranks_every_profile() {
        let mut registry = registry_with_two_workers();
        registry
            .criteria_ranked(query("q1", [W::High, W::Medium, W::Medium]))
            .unwrap();
        registry
            .criteria_ranked(query("q2", [W::Low, W::High, W::Low]))
            .unwrap();

        let out = registry
            .worker_rated(worker("w3", [R::Good, R::VeryPoor, R::Good]))
            .unwrap()
            .unwrap();
        assert_eq!(out.profiles.len(), 2);
        assert_eq!(out.profiles[0].ranking_index, vec![2, 0, 1]);
        assert_eq!(out.profiles[1].ranking_index, vec![2, 1, 0]);
        for profile in &out.profiles {
            assert_eq!(profile.alternative_ids, vec!["w1", "w2", "w3"]);
            assert_eq!(profile.ranking_scores.len(), 3);
        }
        assert!((out.profiles[0].ranking_scores[2] - 0.541600).abs() < 1e-4);
    }

    #[test]
    fn test_single_worker_gets_placeholder_ranking() {
        let mut registry = WorkerRankingRegistry::new(config()).unwrap();
        registry
            .worker_rated(worker("w1", [R::Good, R::Good, R::Good]))
            .unwrap();
        let out = registry
            .criteria_ranked(query("q1", [W::High, W::High, W::High]))
            .unwrap();
        assert_eq!(out[0].profiles[0].ranking_index, vec![0]);
        assert_eq!(out[0].profiles[0].ranking_scores, vec![0.0]);
    }

    #[test]
    fn test_profile_before_any_worker() {
        let mut registry = WorkerRankingRegistry::new(config()).unwrap();
        let out = registry
            .criteria_ranked(query("q1", [W::High, W::High, W::High]))
            .unwrap();
        assert!(out[0].profiles[0].ranking_index.is_empty());

        let out = registry
            .worker_rated(worker("w1", [R::Good, R::Good, R::Good]))
            .unwrap()
            .unwrap();
        assert_eq!(out.profiles[0].ranking_index, vec![0]);
        assert_eq!(out.profiles[0].alternative_ids, vec!["w1"]);
    }

    #[test]
    fn test_duplicate_worker_is_ignored() {
        let mut registry = registry_with_two_workers();
        registry
            .criteria_ranked(query("q1", [W::High, W::Medium, W::Medium]))
            .unwrap();
        let out = registry
            .worker_rated(worker("w1", [R::VeryPoor, R::VeryPoor, R::VeryPoor]))
            .unwrap();
        assert!(out.is_none());
        assert_eq!(registry.alternative_ids("detector").len(), 2);
    }

    #[test]
    fn test_duplicate_query_is_ignored() {
        let mut registry = registry_with_two_workers();
        registry
            .criteria_ranked(query("q1", [W::High, W::Medium, W::Medium]))
            .unwrap();
        let out = registry
            .criteria_ranked(query("q1", [W::Low, W::Low, W::Low]))
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(registry.profiles("detector").len(), 1);
    }

    #[test]
    fn test_same_stream_key_in_other_service_is_distinct() {
        let mut registry = registry_with_two_workers();
        let mut other = worker("w1", [R::Good, R::Good, R::Good]);
        other.service_type = "classifier".into();
        registry.worker_rated(other).unwrap();
        assert_eq!(registry.alternative_ids("classifier"), ["w1"]);
    }

    #[test]
    fn test_query_spanning_services_publishes_each() {
        let mut registry = registry_with_two_workers();
        let event = query("q1", [W::High, W::Medium, W::Medium])
            .with_service("classifier")
            .with_service("detector");
        let out = registry.criteria_ranked(event).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].service_type, "detector");
        assert_eq!(out[1].service_type, "classifier");
        assert_eq!(registry.query_profiles("q1").unwrap().len(), 2);
        assert_eq!(registry.profiles("detector")[0].query_ids, vec!["q1"]);
    }

    #[test]
    fn test_missing_criterion_leaves_state_unchanged() {
        let mut registry = registry_with_two_workers();
        let incomplete = RatedWorker::new("detector", "w3").with_rating("throughput", R::Good);
        assert_eq!(
            registry.worker_rated(incomplete),
            Err(RankingError::MissingCriterion("energy_consumption".into()))
        );
        assert_eq!(registry.alternative_ids("detector").len(), 2);
    }

    #[test]
    fn test_unknown_criterion_is_rejected() {
        let mut registry = registry_with_two_workers();
        let event = query("q1", [W::High, W::Medium, W::Medium]).with_weight("latency", W::Low);
        assert_eq!(
            registry.criteria_ranked(event),
            Err(RankingError::UnknownCriterion("latency".into()))
        );
        assert!(registry.query_profiles("q1").is_none());
        assert!(registry.profiles("detector").is_empty());
    }

    #[test]
    fn test_failed_reranking_leaves_state_unchanged() {
        let config = config().with_ranker(RankerKind::Yuen);
        let mut registry = WorkerRankingRegistry::new(config).unwrap();
        registry
            .worker_rated(worker("w1", [R::Good, R::Good, R::Good]))
            .unwrap();
        registry
            .criteria_ranked(query("q1", [W::High, W::High, W::High]))
            .unwrap();

        // Two identical workers collapse both empirical ideals onto one alternative.
        let result = registry.worker_rated(worker("w2", [R::Good, R::Good, R::Good]));
        assert!(result.is_err());
        assert_eq!(registry.alternative_ids("detector"), ["w1"]);
        assert_eq!(registry.profiles("detector")[0].ranking_index, vec![0]);
    }
}
