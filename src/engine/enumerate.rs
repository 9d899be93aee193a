use std::ops::RangeInclusive;

use itertools::Itertools;
use itertools::structs::MultiProduct;

use crate::model::combination::Combination;
use crate::model::stoichiometry::Stoichiometry;

/// Lazy stream of every copy-count combination allowed by a stoichiometry.
///
/// Entities are visited in label order and each takes every count from 1 to
/// its maximum; the stream is the Cartesian product of those ranges with the
/// last label varying fastest. In uniform mode the same product is filtered
/// down to the combinations whose counts are all equal.
pub struct Combinations {
    labels: Vec<String>,
    product: Option<MultiProduct<RangeInclusive<u32>>>,
    uniform_only: bool,
    expected: usize,
}

impl Combinations {
    pub fn new(stoichiometry: &Stoichiometry, uniform_only: bool) -> Self {
        let sorted = stoichiometry.sorted();
        let labels: Vec<String> = sorted.iter().map(|(l, _)| l.to_string()).collect();
        let maxima: Vec<u32> = sorted.iter().map(|(_, c)| *c).collect();

        let expected = expected_len(&maxima, uniform_only);
        let product = (!labels.is_empty()).then(|| {
            maxima
                .iter()
                .map(|&max| 1..=max)
                .multi_cartesian_product()
        });

        Self {
            labels,
            product,
            uniform_only,
            expected,
        }
    }

    /// Number of combinations the stream yields in total.
    pub fn expected_len(&self) -> usize {
        self.expected
    }

    /// Entity labels in enumeration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let product = self.product.as_mut()?;
        loop {
            let counts = product.next()?;
            if self.uniform_only && !counts.iter().all_equal() {
                continue;
            }
            return Some(
                self.labels
                    .iter()
                    .cloned()
                    .zip(counts)
                    .collect::<Combination>(),
            );
        }
    }
}

/// Enumerates the combinations of `stoichiometry`.
pub fn enumerate_combinations(stoichiometry: &Stoichiometry, uniform_only: bool) -> Combinations {
    Combinations::new(stoichiometry, uniform_only)
}

fn expected_len(maxima: &[u32], uniform_only: bool) -> usize {
    if maxima.is_empty() {
        return 0;
    }
    if uniform_only {
        return maxima.iter().copied().min().unwrap_or(0) as usize;
    }
    maxima
        .iter()
        .try_fold(1usize, |acc, &max| acc.checked_mul(max as usize))
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(combos: &[Combination], labels: &[&str]) -> Vec<Vec<u32>> {
        combos
            .iter()
            .map(|c| labels.iter().map(|l| c.get(l).unwrap()).collect())
            .collect()
    }

    #[test]
    fn full_product_of_two_entities() {
        let s: Stoichiometry = "2A2B".parse().unwrap();
        let combos: Vec<_> = enumerate_combinations(&s, false).collect();
        assert_eq!(
            counts(&combos, &["A", "B"]),
            vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]
        );
    }

    #[test]
    fn uniform_filter() {
        let s: Stoichiometry = "2A2B".parse().unwrap();
        let combos: Vec<_> = enumerate_combinations(&s, true).collect();
        assert_eq!(counts(&combos, &["A", "B"]), vec![vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn uniform_matches_filtered_full_enumeration() {
        let s: Stoichiometry = "5A4B3C".parse().unwrap();
        let filtered: Vec<_> = enumerate_combinations(&s, false)
            .filter(|c| c.is_uniform())
            .collect();
        let uniform: Vec<_> = enumerate_combinations(&s, true).collect();
        assert_eq!(filtered, uniform);
        assert_eq!(uniform.len(), 3);
    }

    #[test]
    fn yield_counts_match_expected_len() {
        let s: Stoichiometry = "5A4B3C".parse().unwrap();
        let full = enumerate_combinations(&s, false);
        assert_eq!(full.expected_len(), 60);
        assert_eq!(full.count(), 60);

        let uniform = enumerate_combinations(&s, true);
        assert_eq!(uniform.expected_len(), 3);
        assert_eq!(uniform.count(), 3);
    }

    #[test]
    fn entities_visited_in_label_order() {
        let s: Stoichiometry = "1C2A".parse().unwrap();
        let combos = enumerate_combinations(&s, false);
        assert_eq!(combos.labels(), ["A", "C"]);
        let names: Vec<String> = combos.map(|c| c.job_name()).collect();
        assert_eq!(names, vec!["1A_1C", "2A_1C"]);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let s: Stoichiometry = "3B2A2C".parse().unwrap();
        let first: Vec<_> = enumerate_combinations(&s, false).collect();
        let second: Vec<_> = enumerate_combinations(&s, false).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn counts_stay_within_bounds_and_are_unique() {
        let s: Stoichiometry = "3A1B2C".parse().unwrap();
        let combos: Vec<_> = enumerate_combinations(&s, false).collect();
        let unique: std::collections::HashSet<_> = combos.iter().collect();
        assert_eq!(unique.len(), combos.len());
        for combo in &combos {
            for (label, count) in combo.iter() {
                assert!(count >= 1 && count <= s.get(label).unwrap());
            }
        }
    }

    #[test]
    fn single_entity() {
        let s: Stoichiometry = "3A".parse().unwrap();
        let names: Vec<String> = enumerate_combinations(&s, true)
            .map(|c| c.job_name())
            .collect();
        assert_eq!(names, vec!["1A", "2A", "3A"]);
    }

    #[test]
    fn empty_stoichiometry_yields_nothing() {
        let combos = enumerate_combinations(&Stoichiometry::new(), false);
        assert_eq!(combos.expected_len(), 0);
        assert_eq!(combos.count(), 0);
    }
}
