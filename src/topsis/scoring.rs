//! Closeness coefficients and final ordering.

use crate::error::{RankingError, Result};

/// `cc_i = d⁻_i / (d⁻_i + d⁺_i)` for every alternative.
///
/// Fails when the denominator is zero or a coefficient is not finite.
pub fn closeness_coefficients(positive: &[f64], negative: &[f64]) -> Result<Vec<f64>> {
    positive
        .iter()
        .zip(negative.iter())
        .enumerate()
        .map(|(alternative, (&d_pos, &d_neg))| {
            let denominator = d_neg + d_pos;
            let cc = d_neg / denominator;
            if denominator == 0.0 || !cc.is_finite() {
                return Err(RankingError::DegenerateCloseness { alternative });
            }
            Ok(cc)
        })
        .collect()
}

/// Alternative indices by descending score. Ties keep input order.
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    // stable sort
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closeness_formula() {
        let cc = closeness_coefficients(&[0.553, 0.020], &[0.020, 0.553]).unwrap();
        assert!((cc[0] - 0.020 / 0.573).abs() < 1e-12);
        assert!((cc[1] - 0.553 / 0.573).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_is_degenerate() {
        let err = closeness_coefficients(&[0.5, 0.0], &[0.5, 0.0]).unwrap_err();
        assert_eq!(err, RankingError::DegenerateCloseness { alternative: 1 });
    }

    #[test]
    fn test_rank_descending() {
        assert_eq!(rank_descending(&[0.2, 0.9, 0.5]), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        assert_eq!(rank_descending(&[0.5, 0.7, 0.5, 0.7]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_empty_scores() {
        assert!(rank_descending(&[]).is_empty());
        assert!(closeness_coefficients(&[], &[]).unwrap().is_empty());
    }
}
