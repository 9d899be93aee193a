use std::collections::BTreeMap;
use std::fmt;

/// Copy counts chosen for one job.
///
/// Backed by a sorted map, so two combinations compare equal exactly when
/// they hold the same `(label, count)` pairs, whatever order they were
/// assembled in. The derived ordering compares the sorted pairs
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Combination {
    counts: BTreeMap<String, u32>,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the copy count of `label`, returning the previous value.
    pub fn insert(&mut self, label: impl Into<String>, count: u32) -> Option<u32> {
        self.counts.insert(label.into(), count)
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.counts.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pairs sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Total number of chains in the combination.
    pub fn total_copies(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// `true` when every entity has the same copy count.
    pub fn is_uniform(&self) -> bool {
        let mut counts = self.counts.values();
        match counts.next() {
            Some(first) => counts.all(|c| c == first),
            None => true,
        }
    }

    /// Canonical job name for this combination.
    pub fn job_name(&self) -> String {
        canonical_name(self.iter())
    }
}

impl<L: Into<String>> FromIterator<(L, u32)> for Combination {
    fn from_iter<I: IntoIterator<Item = (L, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(l, c)| (l.into(), c)).collect(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.job_name())
    }
}

/// Builds the canonical name of a set of `(label, count)` pairs.
///
/// Pairs are sorted by label and rendered as `{count}{label}` tokens joined
/// with `_`, e.g. `[("B", 4), ("A", 5)]` becomes `"5A_4B"`. The input order
/// never affects the result.
///
/// Names are collision-free for single-letter labels. Multi-character labels
/// that themselves start with digits or contain `_` can produce ambiguous
/// names.
pub fn canonical_name<I, L>(pairs: I) -> String
where
    I: IntoIterator<Item = (L, u32)>,
    L: AsRef<str>,
{
    let mut pairs: Vec<(L, u32)> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()).then(a.1.cmp(&b.1)));

    let tokens: Vec<String> = pairs
        .iter()
        .map(|(label, count)| format!("{count}{}", label.as_ref()))
        .collect();
    tokens.join("_")
}
