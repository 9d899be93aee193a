use super::combination::canonical_name;

/// Residue number every entity starts at.
pub const START_RESIDUE: u32 = 1;

/// One entity of a job together with the chains it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityAssignment {
    /// Record identifier of the entity.
    pub name: String,
    /// Chain labels assigned to the copies of this entity, in order.
    pub chain_names: Vec<String>,
    /// First residue number of every copy.
    pub start_res: u32,
    /// Residue sequence.
    pub sequence: String,
}

impl EntityAssignment {
    /// Number of copies, one per assigned chain.
    pub fn copies(&self) -> u32 {
        self.chain_names.len() as u32
    }
}

/// A fully materialized job: its name and the entities it contains.
///
/// Built once per enumerated combination and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    name: String,
    entities: Vec<EntityAssignment>,
}

/// One physical chain of a job, as written to FASTA and TSV outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRecord<'a> {
    /// `{job}_{entity}` or `{job}_{entity}_{copy}` when the entity has more
    /// than one copy.
    pub id: String,
    pub entity: &'a EntityAssignment,
}

impl JobDescriptor {
    /// Creates a descriptor named after the canonical name of its entities.
    pub fn new(entities: Vec<EntityAssignment>) -> Self {
        let name = canonical_name(entities.iter().map(|e| (e.name.as_str(), e.copies())));
        Self { name, entities }
    }

    /// Appends `_{suffix}` to the job name.
    pub fn with_suffix(self, suffix: &str) -> Self {
        Self {
            name: format!("{}_{}", self.name, suffix),
            entities: self.entities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entities(&self) -> &[EntityAssignment] {
        &self.entities
    }

    pub fn entity(&self, name: &str) -> Option<&EntityAssignment> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// `(entity, copies)` pairs in descriptor order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entities.iter().map(|e| (e.name.as_str(), e.copies()))
    }

    /// Re-derives the canonical name from the entities, ignoring any suffix.
    pub fn canonical_name(&self) -> String {
        canonical_name(self.counts())
    }

    /// Total number of chains across all entities.
    pub fn chain_count(&self) -> usize {
        self.entities.iter().map(|e| e.chain_names.len()).sum()
    }

    /// All chain labels of the job, in assignment order.
    pub fn chain_names(&self) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .flat_map(|e| e.chain_names.iter().map(String::as_str))
    }

    /// One record per physical chain.
    pub fn chain_records(&self) -> Vec<ChainRecord<'_>> {
        let mut records = Vec::with_capacity(self.chain_count());
        for entity in &self.entities {
            let copies = entity.copies();
            for copy in 1..=copies {
                let id = if copies > 1 {
                    format!("{}_{}_{}", self.name, entity.name, copy)
                } else {
                    format!("{}_{}", self.name, entity.name)
                };
                records.push(ChainRecord { id, entity });
            }
        }
        records
    }
}
