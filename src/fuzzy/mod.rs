//! Triangular fuzzy numbers and linguistic scales.
//!
//! A triangular fuzzy number `(l, m, r)` models an imprecise quantity:
//! `m` is the most plausible value and `[l, r]` its support. Ratings,
//! weights and ideal reference points in fuzzy TOPSIS are all triangular
//! fuzzy numbers.

mod linguistic;
mod number;

pub use linguistic::{LinguisticRating, LinguisticWeight};
pub use number::{TriangularFuzzyNumber, Tfn};
