//! Fuzzy positive and negative ideal solutions.

use super::config::IdealPolicy;
use crate::fuzzy::Tfn;
use std::cmp::Ordering;

/// Component indices compared when looking for the positive ideal.
const POSITIVE_ORDER: [usize; 3] = [2, 1, 0];

/// Component indices compared when looking for the negative ideal.
const NEGATIVE_ORDER: [usize; 3] = [0, 1, 2];

/// FPIS/FNIS of one evaluation, one entry per criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdealSolution {
    /// Reference fuzzy numbers independent of the data.
    Fixed {
        positive: Vec<Tfn>,
        negative: Vec<Tfn>,
    },

    /// Indices of the best and worst observed alternative per criterion.
    Empirical {
        positive: Vec<usize>,
        negative: Vec<usize>,
    },
}

impl IdealPolicy {
    /// Derives the ideal solutions from the weighted normalized matrix.
    pub(crate) fn select(self, weighted: &[Vec<Tfn>], num_criteria: usize) -> IdealSolution {
        match self {
            IdealPolicy::Fixed => IdealSolution::Fixed {
                positive: vec![Tfn::ONE; num_criteria],
                negative: vec![Tfn::ZERO; num_criteria],
            },
            IdealPolicy::Empirical => {
                let (positive, negative): (Vec<usize>, Vec<usize>) = (0..num_criteria)
                    .map(|crit_j| {
                        let column: Vec<Tfn> = weighted.iter().map(|row| row[crit_j]).collect();
                        (positive_ideal_index(&column), negative_ideal_index(&column))
                    })
                    .unzip();
                IdealSolution::Empirical { positive, negative }
            }
        }
    }
}

impl IdealSolution {
    /// Reference fuzzy number of the positive ideal at `crit_j`.
    pub fn positive_at(&self, weighted: &[Vec<Tfn>], crit_j: usize) -> Tfn {
        match self {
            IdealSolution::Fixed { positive, .. } => positive[crit_j],
            IdealSolution::Empirical { positive, .. } => weighted[positive[crit_j]][crit_j],
        }
    }

    /// Reference fuzzy number of the negative ideal at `crit_j`.
    pub fn negative_at(&self, weighted: &[Vec<Tfn>], crit_j: usize) -> Tfn {
        match self {
            IdealSolution::Fixed { negative, .. } => negative[crit_j],
            IdealSolution::Empirical { negative, .. } => weighted[negative[crit_j]][crit_j],
        }
    }
}

/// Index of the lexicographically greatest fuzzy number, comparing
/// right, then middle, then left.
///
/// Linear scan with a running best starting at index 0. A candidate
/// replaces the best only when strictly greater, so exact ties keep the
/// first-scanned alternative. Returns 0 for an empty column.
pub fn positive_ideal_index(column: &[Tfn]) -> usize {
    scan(column, |candidate, best| {
        lexicographic(candidate, best, POSITIVE_ORDER) == Ordering::Greater
    })
}

/// Index of the lexicographically smallest fuzzy number, comparing
/// left, then middle, then right. Same scan and tie rule as
/// [`positive_ideal_index`].
pub fn negative_ideal_index(column: &[Tfn]) -> usize {
    scan(column, |candidate, best| {
        lexicographic(candidate, best, NEGATIVE_ORDER) == Ordering::Less
    })
}

fn scan(column: &[Tfn], replaces: impl Fn(&Tfn, &Tfn) -> bool) -> usize {
    let mut best_i = 0;
    for (alt_i, candidate) in column.iter().enumerate().skip(1) {
        if replaces(candidate, &column[best_i]) {
            best_i = alt_i;
        }
    }
    best_i
}

/// Compares two fuzzy numbers component by component in `order`; an
/// equal component falls through to the next one.
fn lexicographic(a: &Tfn, b: &Tfn, order: [usize; 3]) -> Ordering {
    let (a, b) = (a.components(), b.components());
    order
        .iter()
        .map(|&k| a[k].partial_cmp(&b[k]).unwrap_or(Ordering::Equal))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tfn(l: f64, m: f64, r: f64) -> Tfn {
        Tfn::new(l, m, r).unwrap()
    }

    fn weighted() -> Vec<Vec<Tfn>> {
        vec![
            vec![tfn(0.09, 0.524, 1.0), tfn(0.03, 0.085, 0.3), tfn(0.03, 0.24, 0.63)],
            vec![tfn(0.09, 0.489, 1.0), tfn(0.06, 0.199, 0.9), tfn(0.09, 0.449, 0.9)],
        ]
    }

    #[test]
    fn test_fixed_policy_ignores_data() {
        let ideal = IdealPolicy::Fixed.select(&weighted(), 3);
        assert_eq!(
            ideal,
            IdealSolution::Fixed {
                positive: vec![Tfn::ONE; 3],
                negative: vec![Tfn::ZERO; 3],
            }
        );
    }

    #[test]
    fn test_empirical_policy_indices() {
        let ideal = IdealPolicy::Empirical.select(&weighted(), 3);
        assert_eq!(
            ideal,
            IdealSolution::Empirical {
                positive: vec![0, 1, 1],
                negative: vec![1, 0, 0],
            }
        );
    }

    #[test]
    fn test_right_tie_falls_through_to_middle() {
        let column = [tfn(0.09, 0.524, 1.0), tfn(0.09, 0.489, 1.0)];
        assert_eq!(positive_ideal_index(&column), 0);
        assert_eq!(negative_ideal_index(&column), 1);
    }

    #[test]
    fn test_smaller_first_level_does_not_replace() {
        // greater middle but smaller right: not lexicographically greater
        let column = [tfn(0.1, 0.2, 0.9), tfn(0.1, 0.5, 0.8)];
        assert_eq!(positive_ideal_index(&column), 0);

        // smaller middle but greater left: not lexicographically smaller
        let column = [tfn(0.1, 0.5, 0.9), tfn(0.2, 0.3, 0.9)];
        assert_eq!(negative_ideal_index(&column), 0);
    }

    #[test]
    fn test_full_tie_falls_through_to_last_level() {
        let column = [tfn(0.1, 0.5, 0.9), tfn(0.2, 0.5, 0.9), tfn(0.0, 0.5, 0.9)];
        assert_eq!(positive_ideal_index(&column), 1);
        assert_eq!(negative_ideal_index(&column), 2);
    }

    #[test]
    fn test_all_equal_selects_first_scanned() {
        let column = [tfn(0.2, 0.4, 0.6); 4];
        assert_eq!(positive_ideal_index(&column), 0);
        assert_eq!(negative_ideal_index(&column), 0);
    }

    #[test]
    fn test_later_strictly_better_replaces_running_best() {
        let column = [
            tfn(0.1, 0.2, 0.3),
            tfn(0.1, 0.2, 0.5),
            tfn(0.1, 0.3, 0.5),
            tfn(0.0, 0.3, 0.5),
        ];
        assert_eq!(positive_ideal_index(&column), 2);
        assert_eq!(negative_ideal_index(&column), 3);
    }

    #[test]
    fn test_reference_lookup() {
        let w = weighted();
        let ideal = IdealPolicy::Empirical.select(&w, 3);
        assert_eq!(ideal.positive_at(&w, 1), w[1][1]);
        assert_eq!(ideal.negative_at(&w, 1), w[0][1]);

        let fixed = IdealPolicy::Fixed.select(&w, 3);
        assert_eq!(fixed.positive_at(&w, 2), Tfn::ONE);
        assert_eq!(fixed.negative_at(&w, 2), Tfn::ZERO);
    }
}
