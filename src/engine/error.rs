//! Error types for job enumeration and chain labeling.
//!
//! Every variant is fatal for the operation that raised it; nothing in the
//! engine retries.

use thiserror::Error;

use crate::model::stoichiometry::ParseStoichiometryError;

/// Errors that can occur while enumerating and building jobs.
#[derive(Debug, Error)]
pub enum Error {
    /// The stoichiometry string could not be parsed.
    ///
    /// Raised before any enumeration takes place.
    #[error(transparent)]
    MalformedStoichiometry(#[from] ParseStoichiometryError),

    /// More sequence records than single-letter entity labels.
    #[error(
        "too many sequences for automatic entity labeling: {count} records, at most {capacity} supported"
    )]
    TooManyEntities {
        /// Number of records supplied.
        count: usize,
        /// Number of available labels.
        capacity: usize,
    },

    /// A combination references an entity the record source does not know.
    #[error("no sequence record for entity '{0}'")]
    MissingSequence(String),

    /// Not enough unused characters to label every target chain.
    #[error(
        "not enough unique chain identifiers: {needed} required but only {available} available"
    )]
    InsufficientLabelCapacity {
        /// Number of target chains that need a label.
        needed: usize,
        /// Number of characters left to choose from.
        available: usize,
    },

    /// Multiset size bounds are empty or start at zero.
    #[error("invalid combination size range {min}..={max}: {detail}")]
    InvalidSizeRange {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
        /// Description of the problem.
        detail: &'static str,
    },
}

impl Error {
    /// Creates a [`MissingSequence`](Error::MissingSequence) error.
    pub fn missing_sequence(label: impl Into<String>) -> Self {
        Self::MissingSequence(label.into())
    }

    /// Creates an [`InvalidSizeRange`](Error::InvalidSizeRange) error.
    pub fn invalid_size_range(min: usize, max: usize, detail: &'static str) -> Self {
        Self::InvalidSizeRange { min, max, detail }
    }
}
