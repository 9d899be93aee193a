use crate::io::error::Error;
use crate::model::job::{EntityAssignment, JobDescriptor};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::io::Write;

#[derive(Serialize)]
struct EntityEntry<'a> {
    name: &'a str,
    chain_names: &'a [String],
    start_res: u32,
    sequence: &'a str,
}

impl<'a> From<&'a EntityAssignment> for EntityEntry<'a> {
    fn from(entity: &'a EntityAssignment) -> Self {
        Self {
            name: &entity.name,
            chain_names: &entity.chain_names,
            start_res: entity.start_res,
            sequence: &entity.sequence,
        }
    }
}

/// Serializes a job as an object keyed by entity name, keeping the
/// descriptor's entity order.
struct JobEntries<'a>(&'a JobDescriptor);

impl Serialize for JobEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entities = self.0.entities();
        let mut map = serializer.serialize_map(Some(entities.len()))?;
        for entity in entities {
            map.serialize_entry(&entity.name, &EntityEntry::from(entity))?;
        }
        map.end()
    }
}

/// Two-space indented, no trailing newline.
pub fn write<W: Write>(writer: W, job: &JobDescriptor) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, &JobEntries(job))?;
    Ok(())
}

pub fn to_value(job: &JobDescriptor) -> Result<serde_json::Value, Error> {
    Ok(serde_json::to_value(JobEntries(job))?)
}
