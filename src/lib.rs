//! Group multi-criteria decision making with TOPSIS.
//!
//! Ranks a fixed set of alternatives against weighted criteria, combining
//! the judgements of several decision makers:
//!
//! - **Fuzzy TOPSIS**: ratings and weights are triangular fuzzy numbers.
//!   Two variants are provided as presets: Chen (mean aggregation, fixed
//!   ideals) and Yuen (envelope aggregation, empirical ideals). Aggregation
//!   and normalization are pluggable strategies.
//! - **Crisp TOPSIS**: the classic method over plain `f64` values.
//! - **Linguistic scales**: five-term rating and weight vocabularies with
//!   their fuzzy and crisp encodings.
//! - **Worker ranking registry**: keeps per-service rankings of workers
//!   for every distinct query weight profile, updated incrementally as
//!   workers and queries arrive.
//!
//! # Architecture
//!
//! The crate has no I/O. Evaluation is synchronous and deterministic;
//! the optional `parallel` feature computes distance rows with rayon,
//! `serde` derives serialization for inputs and results, and `wasm`
//! exposes a JavaScript entry point. Logging goes through `tracing`;
//! no subscriber is installed.

pub mod error;
pub mod fuzzy;
pub mod profiles;
pub mod topsis;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{RankingError, Result};
