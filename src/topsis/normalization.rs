//! Normalization and weighting of the aggregated decision matrix.

use super::types::Criterion;
use crate::error::{RankingError, Result};
use crate::fuzzy::Tfn;

/// Rescales one criterion column of the aggregated decision matrix.
///
/// The stage first asks for a single reference value per criterion, then
/// normalizes every cell of that column against it. Returned components
/// must form a valid fuzzy number (ordered and finite); anything else is
/// reported as a degenerate normalization of that criterion.
pub trait FuzzyNormalizer: Send + Sync {
    /// Returns the name of this normalizer.
    fn name(&self) -> &str;

    /// Computes the reference value for one criterion column.
    fn reference(&self, column: &[Tfn], criterion: Criterion) -> f64;

    /// Normalizes one cell, returning `[left, middle, right]`.
    fn normalize(&self, value: &Tfn, reference: f64, criterion: Criterion) -> [f64; 3];
}

/// Linear scale normalization (Chen, 2000).
///
/// - Benefit: reference `r* = max right`, result `(l/r*, m/r*, r/r*)`.
/// - Cost: reference `l⁻ = min left`, result `(l⁻/r, l⁻/m, l⁻/l)`.
///
/// Both keep `left <= middle <= right` and map into `[0, 1]` for
/// positive ratings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScaleNormalizer;

impl FuzzyNormalizer for LinearScaleNormalizer {
    fn name(&self) -> &str {
        "LinearScale"
    }

    fn reference(&self, column: &[Tfn], criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Benefit => column.iter().map(Tfn::right).fold(0.0, f64::max),
            Criterion::Cost => column.iter().map(Tfn::left).fold(f64::INFINITY, f64::min),
        }
    }

    fn normalize(&self, value: &Tfn, reference: f64, criterion: Criterion) -> [f64; 3] {
        match criterion {
            Criterion::Benefit => [
                value.left() / reference,
                value.middle() / reference,
                value.right() / reference,
            ],
            Criterion::Cost => [
                reference / value.right(),
                reference / value.middle(),
                reference / value.left(),
            ],
        }
    }
}

/// Normalizes the aggregated decision matrix column by column.
pub(crate) fn normalize_matrix(
    aggregated: &[Vec<Tfn>],
    criteria: &[Criterion],
    normalizer: &dyn FuzzyNormalizer,
) -> Result<Vec<Vec<Tfn>>> {
    let mut normalized: Vec<Vec<Tfn>> = aggregated
        .iter()
        .map(|row| Vec::with_capacity(row.len()))
        .collect();

    for (crit_j, &criterion) in criteria.iter().enumerate() {
        let column: Vec<Tfn> = aggregated.iter().map(|row| row[crit_j]).collect();
        let reference = normalizer.reference(&column, criterion);
        let degenerate = || RankingError::DegenerateNormalization {
            criterion: crit_j,
            reference,
        };
        // zero divides into inf/NaN for at least one cell
        if reference == 0.0 || !reference.is_finite() {
            return Err(degenerate());
        }

        for (row, value) in normalized.iter_mut().zip(column.iter()) {
            let [l, m, r] = normalizer.normalize(value, reference, criterion);
            row.push(Tfn::new(l, m, r).map_err(|_| degenerate())?);
        }
    }
    Ok(normalized)
}

/// Multiplies each normalized cell by its criterion's aggregated weight.
pub(crate) fn weight_matrix(normalized: &[Vec<Tfn>], weights: &[Tfn]) -> Result<Vec<Vec<Tfn>>> {
    normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights.iter())
                .map(|(&value, &weight)| {
                    let [l, m, r] = (value * weight).components();
                    Tfn::new(l, m, r)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}
