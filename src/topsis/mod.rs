//! TOPSIS rankers for group decision making.
//!
//! TOPSIS (Technique for Order of Preference by Similarity to Ideal
//! Solution) ranks alternatives by how close they are to a positive ideal
//! and how far from a negative ideal. This module provides:
//!
//! - [`FuzzyTopsis`]: group fuzzy TOPSIS over triangular fuzzy ratings
//!   and weights, with pluggable aggregation and normalization and two
//!   ideal-point policies (Chen's fixed ideals, Yuen's empirical ideals).
//! - [`CrispTopsis`]: classic TOPSIS over `f64` ratings and weights.
//!
//! Both implement [`Ranker`] and can be used interchangeably.
//!
//! # Pipeline
//!
//! Aggregation → Normalization → Weighting → Ideal points → Distances →
//! Closeness → Ranking. Each evaluation recomputes every stage from the
//! stored contributions; the products are kept in an [`Evaluation`].
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making: Methods
//!   and Applications"
//! - Chen (2000), "Extensions of the TOPSIS for group decision-making
//!   under fuzzy environment"

mod aggregation;
mod config;
mod crisp;
mod distance;
mod engine;
mod ideal;
mod input;
mod normalization;
mod scoring;
mod types;

pub use aggregation::{EnvelopeAggregator, FuzzyAggregator, MeanAggregator};
pub use config::{AggregationPolicy, FuzzyTopsisConfig, IdealPolicy};
pub use crisp::{CrispEvaluation, CrispTopsis};
pub use distance::{distance_to_negative, distance_to_positive, Distances};
pub use engine::{Evaluation, FuzzyTopsis};
pub use ideal::{negative_ideal_index, positive_ideal_index, IdealSolution};
pub use input::{Contribution, RankingInput};
pub use normalization::{FuzzyNormalizer, LinearScaleNormalizer};
pub use scoring::{closeness_coefficients, rank_descending};
pub use types::{Criterion, Ranker};
