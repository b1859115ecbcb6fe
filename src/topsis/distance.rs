//! Distances to the ideal solutions.

use super::ideal::IdealSolution;
use crate::fuzzy::Tfn;

/// Distances of every alternative to FPIS and FNIS.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distances {
    /// `[alternative][criterion]` distance to the positive ideal.
    pub positive_per_criterion: Vec<Vec<f64>>,

    /// `[alternative][criterion]` distance to the negative ideal.
    pub negative_per_criterion: Vec<Vec<f64>>,

    /// Total distance to the positive ideal per alternative.
    pub positive: Vec<f64>,

    /// Total distance to the negative ideal per alternative.
    pub negative: Vec<f64>,
}

type Row = (Vec<f64>, Vec<f64>);

/// Computes per-criterion and total distances for every alternative.
pub(crate) fn distances(weighted: &[Vec<Tfn>], ideal: &IdealSolution, parallel: bool) -> Distances {
    let row = |alt_i: usize| -> Row {
        let alternative = &weighted[alt_i];
        let positive = (0..alternative.len())
            .map(|crit_j| distance_to_positive(weighted, ideal, alt_i, crit_j))
            .collect();
        let negative = (0..alternative.len())
            .map(|crit_j| distance_to_negative(weighted, ideal, alt_i, crit_j))
            .collect();
        (positive, negative)
    };

    let rows = collect_rows(weighted.len(), parallel, row);

    let mut out = Distances::default();
    for (positive, negative) in rows {
        out.positive.push(positive.iter().sum());
        out.negative.push(negative.iter().sum());
        out.positive_per_criterion.push(positive);
        out.negative_per_criterion.push(negative);
    }
    out
}

/// Distance of alternative `alt_i` to the positive ideal at `crit_j`.
///
/// Under the empirical policy the selected alternative is at exactly
/// zero distance from itself, without evaluating the formula.
pub fn distance_to_positive(
    weighted: &[Vec<Tfn>],
    ideal: &IdealSolution,
    alt_i: usize,
    crit_j: usize,
) -> f64 {
    if let IdealSolution::Empirical { positive, .. } = ideal {
        if positive[crit_j] == alt_i {
            return 0.0;
        }
    }
    weighted[alt_i][crit_j].distance(&ideal.positive_at(weighted, crit_j))
}

/// Distance of alternative `alt_i` to the negative ideal at `crit_j`.
pub fn distance_to_negative(
    weighted: &[Vec<Tfn>],
    ideal: &IdealSolution,
    alt_i: usize,
    crit_j: usize,
) -> f64 {
    if let IdealSolution::Empirical { negative, .. } = ideal {
        if negative[crit_j] == alt_i {
            return 0.0;
        }
    }
    weighted[alt_i][crit_j].distance(&ideal.negative_at(weighted, crit_j))
}

fn collect_rows<F>(n: usize, parallel: bool, row: F) -> Vec<Row>
where
    F: Fn(usize) -> Row + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return (0..n).into_par_iter().map(row).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..n).map(row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topsis::IdealPolicy;

    fn tfn(l: f64, m: f64, r: f64) -> Tfn {
        Tfn::new(l, m, r).unwrap()
    }

    fn weighted() -> Vec<Vec<Tfn>> {
        vec![
            vec![tfn(0.09, 0.524, 1.0), tfn(0.03, 0.085, 0.3), tfn(0.03, 0.24, 0.63)],
            vec![tfn(0.09, 0.489, 1.0), tfn(0.06, 0.199, 0.9), tfn(0.09, 0.449, 0.9)],
        ]
    }

    fn empirical() -> IdealSolution {
        IdealSolution::Empirical {
            positive: vec![0, 1, 1],
            negative: vec![1, 0, 0],
        }
    }

    #[test]
    fn test_selected_alternative_is_at_zero_distance() {
        let w = weighted();
        let ideal = empirical();
        assert_eq!(distance_to_positive(&w, &ideal, 0, 0), 0.0);
        assert_eq!(distance_to_negative(&w, &ideal, 1, 0), 0.0);

        let d = distance_to_positive(&w, &ideal, 1, 0);
        assert!((d - w[1][0].distance(&w[0][0])).abs() < 1e-15);
        let d = distance_to_negative(&w, &ideal, 0, 0);
        assert!((d - w[0][0].distance(&w[1][0])).abs() < 1e-15);
    }

    #[test]
    fn test_empirical_totals() {
        let d = distances(&weighted(), &empirical(), false);

        assert_eq!(d.positive_per_criterion[0][0], 0.0);
        assert!((d.positive_per_criterion[0][1] - 0.353).abs() < 1e-3);
        assert!((d.positive_per_criterion[0][2] - 0.200).abs() < 1e-3);
        assert!((d.positive_per_criterion[1][0] - 0.020).abs() < 1e-3);
        assert_eq!(d.positive_per_criterion[1][1], 0.0);
        assert_eq!(d.positive_per_criterion[1][2], 0.0);

        assert!((d.positive[0] - 0.553).abs() < 1e-3);
        assert!((d.positive[1] - 0.020).abs() < 1e-3);
        assert!((d.negative[0] - 0.020).abs() < 1e-3);
        assert!((d.negative[1] - 0.553).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_distances() {
        let w = weighted();
        let ideal = IdealPolicy::Fixed.select(&w, 3);
        let d = distances(&w, &ideal, false);

        assert!((d.positive_per_criterion[0][0] - 0.59).abs() < 0.005);
        assert_eq!(d.negative_per_criterion[0][0], w[0][0].rms_norm());
        let total: f64 = w[1].iter().map(|t| t.distance(&Tfn::ONE)).sum();
        assert!((d.positive[1] - total).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_flag_gives_same_result() {
        let w = weighted();
        let ideal = empirical();
        assert_eq!(distances(&w, &ideal, true), distances(&w, &ideal, false));
    }
}
