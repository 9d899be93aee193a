use crate::model::chain::ChainLabels;
use crate::model::combination::Combination;
use crate::model::job::{EntityAssignment, JobDescriptor, START_RESIDUE};
use crate::model::record::SequenceSource;

use super::error::Error;

/// Materializes combinations into job descriptors.
///
/// Every call to [`build`](JobBuilder::build) starts a fresh chain label
/// cursor, so each job is labeled from `"A"` and no label repeats within it.
pub struct JobBuilder<'a, S: SequenceSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: SequenceSource + ?Sized> JobBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Builds the descriptor of one combination.
    ///
    /// Entities are labeled in label order. Entries are keyed by the record
    /// id each label resolves to; two labels that resolve to the same id
    /// share one entry and their chains are appended in order.
    pub fn build(&self, combination: &Combination) -> Result<JobDescriptor, Error> {
        let mut chains = ChainLabels::new();
        let mut entities: Vec<EntityAssignment> = Vec::with_capacity(combination.len());

        for (label, count) in combination.iter() {
            let record = self
                .source
                .get(label)
                .ok_or_else(|| Error::missing_sequence(label))?;
            let assigned = chains.take_labels(count as usize);

            match entities.iter_mut().find(|e| e.name == record.id) {
                Some(entity) => entity.chain_names.extend(assigned),
                None => entities.push(EntityAssignment {
                    name: record.id.clone(),
                    chain_names: assigned,
                    start_res: START_RESIDUE,
                    sequence: record.sequence.clone(),
                }),
            }
        }

        Ok(JobDescriptor::new(entities))
    }
}
