use std::collections::HashSet;
use std::fmt;

use crate::model::stoichiometry::{
    LabelShape, ParseStoichiometryError, parse_count, scan_counted_labels,
};

use super::config::TargetPolicy;
use super::error::Error;

const LOWER_FIRST: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_FIRST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Template chain labels paired with the target chain ids they map to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMapping {
    /// One template label per chain, each label repeated by its count.
    pub template_labels: Vec<String>,
    /// One single-character target id per chain.
    pub target_labels: Vec<char>,
}

impl fmt::Display for ChainMapping {
    /// Renders `"A B C C - a b c d"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: Vec<String> = self.target_labels.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{} - {}",
            self.template_labels.join(" "),
            targets.join(" ")
        )
    }
}

/// Expands a job basename such as `"1A1B2C"` into per-chain template labels
/// and fresh target ids.
///
/// Labels are runs of ASCII letters, so `"2Ab"` names the label `Ab`. The
/// target ids depend on `policy`:
///
/// - [`TargetPolicy::Disjoint`] walks `a-z` then `A-Z` and skips every
///   character that occurs in any template label.
/// - [`TargetPolicy::Sequential`] takes `A-Z` then `a-z` from the start,
///   whether or not template labels use those characters.
pub fn match_chain_ids(basename: &str, policy: TargetPolicy) -> Result<ChainMapping, Error> {
    let tokens = scan_counted_labels(basename, LabelShape::LetterRun);
    if tokens.is_empty() {
        return Err(ParseStoichiometryError::new(
            basename,
            "expected one or more <count><letters> tokens",
        )
        .into());
    }

    let mut counted = Vec::with_capacity(tokens.len());
    for (digits, label) in tokens {
        counted.push((label, parse_count(basename, digits)? as usize));
    }
    let needed = counted
        .iter()
        .try_fold(0usize, |total, &(_, count)| total.checked_add(count))
        .unwrap_or(usize::MAX);

    let available: Vec<char> = match policy {
        TargetPolicy::Disjoint => {
            let used: HashSet<char> = counted
                .iter()
                .filter(|&&(_, count)| count > 0)
                .flat_map(|(label, _)| label.chars())
                .collect();
            LOWER_FIRST.chars().filter(|c| !used.contains(c)).collect()
        }
        TargetPolicy::Sequential => UPPER_FIRST.chars().collect(),
    };

    // Checked before expanding so huge counts fail without allocating.
    if available.len() < needed {
        return Err(Error::InsufficientLabelCapacity {
            needed,
            available: available.len(),
        });
    }

    let template_labels = counted
        .into_iter()
        .flat_map(|(label, count)| std::iter::repeat_n(label.to_string(), count))
        .collect();

    Ok(ChainMapping {
        template_labels,
        target_labels: available.into_iter().take(needed).collect(),
    })
}
