//! Linguistic terms for ratings and weights.
//!
//! Decision makers usually express judgements verbally ("good",
//! "medium-high importance"). These scales map each term to a
//! triangular fuzzy number and to a crisp equivalent for the crisp ranker.
//!
//! # References
//!
//! Nădăban, Dzitac & Dzitac (2016), "Fuzzy TOPSIS: A General View",
//! Procedia Computer Science 91, Table 2.

use super::number::Tfn;

/// Rating of an alternative against a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinguisticRating {
    VeryPoor,
    Poor,
    Medium,
    Good,
    VeryGood,
}

impl LinguisticRating {
    pub const ALL: [Self; 5] = [
        Self::VeryPoor,
        Self::Poor,
        Self::Medium,
        Self::Good,
        Self::VeryGood,
    ];

    pub fn fuzzy(self) -> Tfn {
        match self {
            Self::VeryPoor => Tfn::from_raw(1.0, 1.0, 3.0),
            Self::Poor => Tfn::from_raw(1.0, 3.0, 5.0),
            Self::Medium => Tfn::from_raw(3.0, 5.0, 7.0),
            Self::Good => Tfn::from_raw(7.0, 9.0, 10.0),
            Self::VeryGood => Tfn::from_raw(9.0, 10.0, 10.0),
        }
    }

    pub fn crisp(self) -> f64 {
        match self {
            Self::VeryPoor => 1.0,
            Self::Poor => 3.0,
            Self::Medium => 5.0,
            Self::Good => 8.0,
            Self::VeryGood => 10.0,
        }
    }
}

/// Importance of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinguisticWeight {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

impl LinguisticWeight {
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::MediumLow,
        Self::Medium,
        Self::MediumHigh,
        Self::High,
    ];

    pub fn fuzzy(self) -> Tfn {
        match self {
            Self::Low => Tfn::from_raw(0.0, 0.1, 0.3),
            Self::MediumLow => Tfn::from_raw(0.1, 0.3, 0.5),
            Self::Medium => Tfn::from_raw(0.3, 0.5, 0.7),
            Self::MediumHigh => Tfn::from_raw(0.5, 0.7, 0.9),
            Self::High => Tfn::from_raw(0.7, 0.9, 1.0),
        }
    }

    pub fn crisp(self) -> f64 {
        match self {
            Self::Low => 0.1,
            Self::MediumLow => 0.3,
            Self::Medium => 0.5,
            Self::MediumHigh => 0.7,
            Self::High => 1.0,
        }
    }
}

impl From<LinguisticRating> for Tfn {
    fn from(value: LinguisticRating) -> Self {
        value.fuzzy()
    }
}

impl From<LinguisticWeight> for Tfn {
    fn from(value: LinguisticWeight) -> Self {
        value.fuzzy()
    }
}
