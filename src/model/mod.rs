//! Core data structures describing stoichiometries, combinations and jobs.
//!
//! This module provides the types that flow through `stoich-forge`:
//!
//! - [`stoichiometry`] – Maximum copy count per entity, parsed from `"5A4B3C"`.
//! - [`combination`] – One chosen copy count per entity and its canonical name.
//! - [`chain`] – Bijective base-26 chain labels (`A … Z, AA, AB …`).
//! - [`record`] – Sequence records and the lookup trait used to resolve entities.
//! - [`job`] – Materialized job descriptors consumed by the writers.
//!
//! The enumeration input ([`Stoichiometry`]) is kept apart from the per-job
//! output ([`JobDescriptor`]) so the [`crate::engine`] can turn one into a lazy
//! stream of the other.
//!
//! [`Stoichiometry`]: stoichiometry::Stoichiometry
//! [`JobDescriptor`]: job::JobDescriptor

pub mod chain;
pub mod combination;
pub mod job;
pub mod record;
pub mod stoichiometry;
