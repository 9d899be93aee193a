use std::collections::{BTreeMap, HashMap};

/// A named protein sequence, typically one FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in residues.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Lookup of sequence records by entity label.
pub trait SequenceSource {
    fn get(&self, label: &str) -> Option<&SequenceRecord>;
}

impl SequenceSource for HashMap<String, SequenceRecord> {
    fn get(&self, label: &str) -> Option<&SequenceRecord> {
        HashMap::get(self, label)
    }
}

impl SequenceSource for BTreeMap<String, SequenceRecord> {
    fn get(&self, label: &str) -> Option<&SequenceRecord> {
        BTreeMap::get(self, label)
    }
}
