use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Error returned when a stoichiometry string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed stoichiometry '{input}': {reason}")]
pub struct ParseStoichiometryError {
    input: String,
    reason: &'static str,
}

impl ParseStoichiometryError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Short description of what was wrong with the input.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Maximum copy count for each entity taking part in an assembly.
///
/// Entities are kept in the order they first appear in the source text so the
/// value displays the way it was written. That order carries no meaning:
/// enumeration and naming always sort by label.
///
/// Inserting a label that is already present replaces its count and keeps its
/// original position, so `"2A3A"` parses to `{A: 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stoichiometry {
    entries: Vec<(String, u32)>,
}

impl Stoichiometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum copy count of `label`, returning the previous value.
    pub fn insert(&mut self, label: impl Into<String>, max_copies: u32) -> Option<u32> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => Some(std::mem::replace(count, max_copies)),
            None => {
                self.entries.push((label, max_copies));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Entries sorted by entity label.
    pub fn sorted(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Sum of all maximum copy counts.
    pub fn total_copies(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }
}

impl FromStr for Stoichiometry {
    type Err = ParseStoichiometryError;

    /// Parses the compact `<count><letter>` encoding, e.g. `"5A4B3C"`.
    ///
    /// Anything between tokens is skipped. The string must contain at least
    /// one token and every count must be positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = scan_counted_labels(s, LabelShape::SingleUpper);
        if tokens.is_empty() {
            return Err(ParseStoichiometryError::new(
                s,
                "expected one or more <count><A-Z> tokens",
            ));
        }

        let mut stoichiometry = Stoichiometry::new();
        for (digits, label) in tokens {
            let count = parse_count(s, digits)?;
            if count == 0 {
                return Err(ParseStoichiometryError::new(
                    s,
                    "copy counts must be at least 1",
                ));
            }
            stoichiometry.insert(label, count);
        }

        Ok(stoichiometry)
    }
}

impl fmt::Display for Stoichiometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            write!(f, "{count}{label}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelShape {
    /// Exactly one `A-Z` character.
    SingleUpper,
    /// A maximal run of ASCII letters.
    LetterRun,
}

static SINGLE_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([A-Z])").expect("valid token pattern"));
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([A-Za-z]+)").expect("valid token pattern"));

impl LabelShape {
    fn pattern(self) -> &'static Regex {
        match self {
            LabelShape::SingleUpper => &SINGLE_UPPER,
            LabelShape::LetterRun => &LETTER_RUN,
        }
    }
}

/// Finds every non-overlapping `<digits><label>` token in `input`, left to
/// right, skipping text that does not form a token.
pub(crate) fn scan_counted_labels(input: &str, shape: LabelShape) -> Vec<(&str, &str)> {
    shape
        .pattern()
        .captures_iter(input)
        .map(|caps| {
            let (_, [digits, label]) = caps.extract();
            (digits, label)
        })
        .collect()
}

pub(crate) fn parse_count(input: &str, digits: &str) -> Result<u32, ParseStoichiometryError> {
    digits
        .parse::<u32>()
        .map_err(|_| ParseStoichiometryError::new(input, "copy count is out of range"))
}
