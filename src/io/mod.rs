//! Readers and writers for sequence records and job descriptors.
//!
//! FASTA is read into [`SequenceRecord`]s; each [`JobDescriptor`] can be
//! written as a JSON entity map, as per-chain FASTA records, or as rows of a
//! tab-separated [`JobTable`]. FASTA goes through `bio::io::fasta` and TSV
//! through `csv`. Writers take any [`std::io::Write`] and never create files or
//! directories themselves.

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;
pub mod templates;

mod fasta {
    pub mod reader;
    pub mod writer;
}

mod json {
    pub mod writer;
}

mod tsv {
    pub mod writer;
}

pub use error::Error;
pub use fasta::writer::LINE_WIDTH as FASTA_LINE_WIDTH;
pub use templates::{NO_TEMPLATE, sanitize_name as sanitize_template_name, template_names};
pub use tsv::writer::{HEADER as TSV_HEADER, JobTable, MOLECULE_TYPE};

use crate::model::job::JobDescriptor;
use crate::model::record::SequenceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Json,
    Tsv,
}

impl Format {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Fasta => "fasta",
            Format::Json => "json",
            Format::Tsv => "tsv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Fasta => write!(f, "FASTA"),
            Format::Json => write!(f, "JSON"),
            Format::Tsv => write!(f, "TSV"),
        }
    }
}

/// Reads every record of a FASTA stream.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>, Error> {
    fasta::reader::read(reader)
}

/// Writes sequence records as FASTA.
pub fn write_fasta<W: Write>(writer: W, records: &[SequenceRecord]) -> Result<(), Error> {
    fasta::writer::write(writer, records)
}

/// Writes one FASTA record per chain of `job`.
pub fn write_job_fasta<W: Write>(writer: W, job: &JobDescriptor) -> Result<(), Error> {
    fasta::writer::write_job(writer, job)
}

/// Writes `job` as a pretty-printed JSON entity map, without a trailing
/// newline.
pub fn write_job_json<W: Write>(writer: W, job: &JobDescriptor) -> Result<(), Error> {
    json::writer::write(writer, job)
}

/// Converts `job` into its JSON entity map.
pub fn job_to_json(job: &JobDescriptor) -> Result<serde_json::Value, Error> {
    json::writer::to_value(job)
}

/// Writes a complete TSV table for `jobs`.
pub fn write_tsv<'a, W, I>(writer: W, jobs: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = &'a JobDescriptor>,
{
    tsv::writer::write(writer, jobs)
}
