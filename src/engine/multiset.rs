use std::collections::BTreeSet;

use itertools::Itertools;

use crate::model::combination::Combination;
use crate::model::job::JobDescriptor;
use crate::model::record::SequenceRecord;

use super::builder::JobBuilder;
use super::config::MultisetConfig;
use super::error::Error;
use super::source::IdSource;

/// Every distinct multiset of `ids` with a size inside the configured range.
///
/// Each multiset is reduced to its `(id, occurrences)` signature; the result
/// is deduplicated and sorted by signature.
pub fn unique_multisets(ids: &[String], config: &MultisetConfig) -> Result<Vec<Combination>, Error> {
    validate_range(config)?;

    let mut signatures = BTreeSet::new();
    for size in config.min_size..=config.max_size {
        for multiset in ids.iter().combinations_with_replacement(size) {
            let signature: Combination = multiset
                .into_iter()
                .counts()
                .into_iter()
                .map(|(id, n)| (id.as_str(), n as u32))
                .collect();
            signatures.insert(signature);
        }
    }

    Ok(signatures.into_iter().collect())
}

fn validate_range(config: &MultisetConfig) -> Result<(), Error> {
    if config.min_size == 0 {
        return Err(Error::invalid_size_range(
            config.min_size,
            config.max_size,
            "minimum size must be at least 1",
        ));
    }
    if config.min_size > config.max_size {
        return Err(Error::invalid_size_range(
            config.min_size,
            config.max_size,
            "minimum size exceeds maximum size",
        ));
    }
    Ok(())
}

/// Multiset jobs for a set of records, repeated once per template.
pub struct MultisetPlan {
    source: IdSource,
    signatures: Vec<Combination>,
    templates: Vec<String>,
}

impl MultisetPlan {
    /// Enumerates the signatures of `records`; each is paired with every
    /// template name.
    pub fn new(
        records: Vec<SequenceRecord>,
        templates: Vec<String>,
        config: &MultisetConfig,
    ) -> Result<Self, Error> {
        let source = IdSource::new(records);
        let signatures = unique_multisets(&source.ids(), config)?;
        Ok(Self {
            source,
            signatures,
            templates,
        })
    }

    pub fn signatures(&self) -> &[Combination] {
        &self.signatures
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn source(&self) -> &IdSource {
        &self.source
    }

    /// Total number of jobs across all templates.
    pub fn job_count(&self) -> usize {
        self.signatures.len() * self.templates.len()
    }

    /// Jobs for one template, named `{signature}_{template}`.
    pub fn jobs_for_template<'a>(
        &'a self,
        template: &'a str,
    ) -> impl Iterator<Item = Result<JobDescriptor, Error>> + 'a {
        let builder = JobBuilder::new(&self.source);
        self.signatures
            .iter()
            .map(move |signature| {
                builder
                    .build(signature)
                    .map(|job| job.with_suffix(template))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn config(min_size: usize, max_size: usize) -> MultisetConfig {
        MultisetConfig { min_size, max_size }
    }

    #[test]
    fn sizes_two_to_three_over_two_ids() {
        let signatures = unique_multisets(&ids(&["X", "Y"]), &config(2, 3)).unwrap();
        let names: Vec<String> = signatures.iter().map(|s| s.job_name()).collect();
        assert_eq!(
            names,
            vec!["1X_1Y", "1X_2Y", "2X", "2X_1Y", "3X", "2Y", "3Y"]
        );

        let expected: BTreeSet<Combination> = [
            vec![("X", 2)],
            vec![("X", 1), ("Y", 1)],
            vec![("Y", 2)],
            vec![("X", 3)],
            vec![("X", 2), ("Y", 1)],
            vec![("X", 1), ("Y", 2)],
            vec![("Y", 3)],
        ]
        .into_iter()
        .map(|pairs| pairs.into_iter().collect())
        .collect();
        assert_eq!(signatures.len(), expected.len());
        assert_eq!(signatures.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn signature_count_is_multiset_coefficient() {
        // C(n + k - 1, k) summed over k = 1..=3 for n = 4: 4 + 10 + 20.
        let signatures = unique_multisets(&ids(&["a", "b", "c", "d"]), &config(1, 3)).unwrap();
        assert_eq!(signatures.len(), 34);
    }

    #[test]
    fn empty_ids_yield_nothing() {
        assert!(unique_multisets(&[], &config(2, 6)).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(matches!(
            unique_multisets(&ids(&["X"]), &config(0, 2)),
            Err(Error::InvalidSizeRange { min: 0, max: 2, .. })
        ));
        assert!(matches!(
            unique_multisets(&ids(&["X"]), &config(3, 2)),
            Err(Error::InvalidSizeRange { min: 3, max: 2, .. })
        ));
    }

    #[test]
    fn plan_cross_joins_templates() {
        let plan = MultisetPlan::new(
            vec![
                SequenceRecord::new("X", "MKV"),
                SequenceRecord::new("Y", "GSS"),
            ],
            vec!["t1".to_string(), "t2".to_string()],
            &config(2, 2),
        )
        .unwrap();
        assert_eq!(plan.signatures().len(), 3);
        assert_eq!(plan.job_count(), 6);

        let names: Vec<String> = plan
            .jobs_for_template("t2")
            .map(|job| job.unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["1X_1Y_t2", "2X_t2", "2Y_t2"]);
    }

    #[test]
    fn plan_jobs_carry_sequences_and_chains() {
        let plan = MultisetPlan::new(
            vec![SequenceRecord::new("X", "MKV")],
            vec!["no_template".to_string()],
            &config(2, 2),
        )
        .unwrap();
        let job = plan.jobs_for_template("no_template").next().unwrap().unwrap();
        assert_eq!(job.name(), "2X_no_template");
        assert_eq!(job.canonical_name(), "2X");
        let x = job.entity("X").unwrap();
        assert_eq!(x.sequence, "MKV");
        assert_eq!(x.chain_names, vec!["A", "B"]);
    }
}
