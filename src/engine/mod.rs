mod builder;
mod chains;
mod config;
mod enumerate;
mod error;
mod multiset;
mod source;

pub use builder::JobBuilder;
pub use chains::{ChainMapping, match_chain_ids};
pub use config::{JobConfig, MultisetConfig, TargetPolicy};
pub use enumerate::{Combinations, enumerate_combinations};
pub use error::Error;
pub use multiset::{MultisetPlan, unique_multisets};
pub use source::{IdSource, LetterSource};

use crate::model::job::JobDescriptor;
use crate::model::record::SequenceRecord;
use crate::model::stoichiometry::Stoichiometry;

/// Stoichiometry-driven jobs over a set of letter-labeled records.
pub struct JobPlan {
    source: LetterSource,
    stoichiometry: Stoichiometry,
    config: JobConfig,
}

impl JobPlan {
    pub fn new(
        records: Vec<SequenceRecord>,
        stoichiometry: Stoichiometry,
        config: JobConfig,
    ) -> Result<Self, Error> {
        let source = LetterSource::new(records)?;
        Ok(Self {
            source,
            stoichiometry,
            config,
        })
    }

    pub fn source(&self) -> &LetterSource {
        &self.source
    }

    pub fn stoichiometry(&self) -> &Stoichiometry {
        &self.stoichiometry
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// A fresh combination stream.
    pub fn combinations(&self) -> Combinations {
        enumerate_combinations(&self.stoichiometry, self.config.uniform_only)
    }

    /// Number of jobs [`jobs`](JobPlan::jobs) yields.
    pub fn job_count(&self) -> usize {
        self.combinations().expected_len()
    }

    /// Lazily builds one descriptor per combination.
    pub fn jobs(&self) -> impl Iterator<Item = Result<JobDescriptor, Error>> + '_ {
        let builder = JobBuilder::new(&self.source);
        self.combinations()
            .map(move |combination| builder.build(&combination))
    }
}

/// Plans the jobs for `records` under a compact stoichiometry string.
///
/// Records are labeled `A`, `B`, `C` … in order; the stoichiometry refers to
/// them by those letters.
///
/// # Errors
///
/// - [`Error::TooManyEntities`] for more than 26 records.
/// - [`Error::MalformedStoichiometry`] when `stoichiometry` does not parse.
pub fn plan_jobs(
    records: Vec<SequenceRecord>,
    stoichiometry: &str,
    config: &JobConfig,
) -> Result<JobPlan, Error> {
    let source = LetterSource::new(records)?;
    let stoichiometry: Stoichiometry = stoichiometry.parse()?;
    Ok(JobPlan {
        source,
        stoichiometry,
        config: *config,
    })
}
