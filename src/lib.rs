//! Combinatorial job preparation for multi-chain protein structure prediction.
//! Given a set of sequences and a stoichiometry, it enumerates every allowed
//! combination of chain copies, labels each chain, and names each job
//! deterministically so identical combinations always map to the same name.
//!
//! # Features
//!
//! - **Stoichiometry parsing** — Compact `"5A4B3C"` strings into per-entity
//!   maximum copy counts
//! - **Combination enumeration** — Lazy Cartesian product of copy counts,
//!   optionally restricted to uniform copies
//! - **Chain labeling** — Bijective base-26 labels (`A … Z, AA, AB …`),
//!   restarted for every job
//! - **Canonical naming** — Order-independent, collision-free job names
//! - **Multiset jobs** — Unique id multisets of a size range, crossed with
//!   template names
//! - **Flexible I/O** — Read FASTA; write JSON, FASTA and TSV job inputs
//!
//! # Quick Start
//!
//! The main entry point is the [`plan_jobs`] function, which takes sequence
//! records and a stoichiometry string and produces a [`JobPlan`] that builds
//! one [`JobDescriptor`] per combination:
//!
//! ```
//! use stoich_forge::{JobConfig, SequenceRecord, plan_jobs};
//!
//! let records = vec![
//!     SequenceRecord::new("heavy", "EVQLVESGGG"),
//!     SequenceRecord::new("light", "DIQMTQSPSS"),
//! ];
//!
//! // Up to two copies of record A and one copy of record B.
//! let plan = plan_jobs(records, "2A1B", &JobConfig::default())?;
//! assert_eq!(plan.job_count(), 2);
//!
//! let jobs = plan.jobs().collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(jobs[0].name(), "1heavy_1light");
//! assert_eq!(jobs[1].name(), "2heavy_1light");
//!
//! // Chains are labeled from "A" within every job.
//! let heavy = jobs[1].entity("heavy").unwrap();
//! assert_eq!(heavy.chain_names, ["A", "B"]);
//! assert_eq!(jobs[1].entity("light").unwrap().chain_names, ["C"]);
//! # Ok::<(), stoich_forge::EngineError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — FASTA reading; JSON, FASTA and TSV writing; template discovery
//! - [`plan_jobs`] — Stoichiometry-driven job planning
//! - [`MultisetPlan`] — Multiset jobs crossed with templates
//! - [`match_chain_ids`] — Template-to-target chain id mapping
//!
//! # Data Types
//!
//! - [`Stoichiometry`] — Maximum copy count per entity
//! - [`Combination`] — Chosen copy count per entity
//! - [`ChainLabels`] — Per-job chain label cursor
//! - [`SequenceRecord`] — Named sequence
//! - [`JobDescriptor`] — Materialized job with [`EntityAssignment`]s

mod engine;
mod model;

pub mod io;

pub use model::chain::{ALPHABET_LEN, ChainLabels, index_for_label, label_for_index};
pub use model::combination::{Combination, canonical_name};
pub use model::job::{ChainRecord, EntityAssignment, JobDescriptor, START_RESIDUE};
pub use model::record::{SequenceRecord, SequenceSource};
pub use model::stoichiometry::{ParseStoichiometryError, Stoichiometry};

pub use engine::{
    ChainMapping, Combinations, IdSource, JobBuilder, JobConfig, JobPlan, LetterSource,
    MultisetConfig, MultisetPlan, TargetPolicy, enumerate_combinations, match_chain_ids,
    plan_jobs, unique_multisets,
};

pub use engine::Error as EngineError;
