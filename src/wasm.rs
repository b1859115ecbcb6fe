//! JavaScript bindings.
//!
//! Requests and responses cross the boundary as plain JS objects via
//! `serde-wasm-bindgen`. Fuzzy numbers are `[left, middle, right]` arrays.
//!
//! ```js
//! const { ranking, scores } = rank_fuzzy_topsis({
//!   criteria: [true, false, true],
//!   config: { rating_aggregation: "envelope", weight_aggregation: "envelope", ideal: "empirical" },
//!   decision_makers: [
//!     { decision_matrix: [[[9, 10, 10], [3, 5, 7], [1, 3, 5]], ...], criteria_weights: [...] },
//!   ],
//! });
//! ```

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::fuzzy::Tfn;
use crate::topsis::{Contribution, FuzzyTopsis, FuzzyTopsisConfig};

#[derive(Debug, Clone, Deserialize)]
struct RankRequest {
    criteria: Vec<bool>,
    #[serde(default)]
    config: FuzzyTopsisConfig,
    decision_makers: Vec<Contribution<Tfn>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RankResponse {
    ranking: Vec<usize>,
    scores: Vec<f64>,
}

/// Ranks alternatives with fuzzy TOPSIS.
///
/// Errors are returned as JS strings.
#[wasm_bindgen]
pub fn rank_fuzzy_topsis(request: JsValue) -> std::result::Result<JsValue, JsValue> {
    let request: RankRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let response = rank(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&response).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn rank(request: RankRequest) -> Result<RankResponse> {
    let mut engine = FuzzyTopsis::new(&request.criteria, request.config)?;
    for contribution in request.decision_makers {
        engine.add_decision_maker(contribution.decision_matrix, contribution.criteria_weights)?;
    }
    let ranking = engine.evaluate(true)?;
    let scores = engine
        .ranking_scores()
        .map(<[f64]>::to_vec)
        .unwrap_or_default();
    Ok(RankResponse { ranking, scores })
}
