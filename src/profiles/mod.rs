//! Service-level worker ranking.
//!
//! Workers of the same service type are the alternatives; each query
//! contributes a criteria weight vector. Queries with identical weights
//! share a ranked profile, and every profile is re-ranked when a new
//! worker of its service type arrives.
//!
//! The registry is transport-agnostic: feed it [`RatedWorker`] and
//! [`CriteriaRanked`] events and forward the [`ProfilesRanked`] payloads
//! it returns.

mod config;
mod registry;
mod types;

pub use config::{CriterionSpec, RankerKind, RegistryConfig};
pub use registry::WorkerRankingRegistry;
pub use types::{profile_id, CriteriaRanked, ProfilesRanked, RankedProfile, RatedWorker};
