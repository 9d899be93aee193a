use crate::model::chain::ALPHABET_LEN;
use crate::model::record::{SequenceRecord, SequenceSource};

use super::error::Error;

/// Records labeled `A`, `B`, `C` … in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSource {
    records: Vec<SequenceRecord>,
}

impl LetterSource {
    /// Assigns single-letter labels to `records` by position.
    ///
    /// Fails with [`Error::TooManyEntities`] beyond 26 records.
    pub fn new(records: Vec<SequenceRecord>) -> Result<Self, Error> {
        if records.len() > ALPHABET_LEN {
            return Err(Error::TooManyEntities {
                count: records.len(),
                capacity: ALPHABET_LEN,
            });
        }
        Ok(Self { records })
    }

    /// `(label, record)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &SequenceRecord)> {
        ('A'..='Z').zip(self.records.iter())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SequenceSource for LetterSource {
    fn get(&self, label: &str) -> Option<&SequenceRecord> {
        let &[b] = label.as_bytes() else {
            return None;
        };
        if !b.is_ascii_uppercase() {
            return None;
        }
        self.records.get(usize::from(b - b'A'))
    }
}

/// Records keyed by their own identifier.
///
/// Duplicate ids keep the position of their first occurrence and the
/// sequence of their last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdSource {
    records: Vec<SequenceRecord>,
}

impl IdSource {
    pub fn new(records: Vec<SequenceRecord>) -> Self {
        let mut unique: Vec<SequenceRecord> = Vec::with_capacity(records.len());
        for record in records {
            match unique.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => unique.push(record),
            }
        }
        Self { records: unique }
    }

    /// Unique ids in first-appearance order.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SequenceSource for IdSource {
    fn get(&self, label: &str) -> Option<&SequenceRecord> {
        self.records.iter().find(|r| r.id == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<SequenceRecord> {
        (0..n)
            .map(|i| SequenceRecord::new(format!("seq{i}"), "MKV"))
            .collect()
    }

    #[test]
    fn letters_assigned_by_position() {
        let source = LetterSource::new(records(3)).unwrap();
        assert_eq!(source.get("A").map(|r| r.id.as_str()), Some("seq0"));
        assert_eq!(source.get("C").map(|r| r.id.as_str()), Some("seq2"));
        assert!(source.get("D").is_none());
        assert!(source.get("a").is_none());
        assert!(source.get("AB").is_none());
    }

    #[test]
    fn twenty_six_records_fit() {
        let source = LetterSource::new(records(26)).unwrap();
        assert_eq!(source.get("Z").map(|r| r.id.as_str()), Some("seq25"));
    }

    #[test]
    fn too_many_records() {
        let err = LetterSource::new(records(27)).unwrap_err();
        assert!(matches!(
            err,
            Error::TooManyEntities {
                count: 27,
                capacity: 26
            }
        ));
    }

    #[test]
    fn id_source_deduplicates_last_sequence_wins() {
        let source = IdSource::new(vec![
            SequenceRecord::new("X", "AAA"),
            SequenceRecord::new("Y", "CCC"),
            SequenceRecord::new("X", "GGG"),
        ]);
        assert_eq!(source.ids(), vec!["X", "Y"]);
        assert_eq!(source.get("X").map(|r| r.sequence.as_str()), Some("GGG"));
    }
}
