use crate::io::error::Error;
use crate::model::job::JobDescriptor;
use csv::WriterBuilder;
use std::io::Write;

pub const HEADER: [&str; 4] = ["job_name", "type", "id", "sequence"];

/// Molecule type written in the `type` column.
pub const MOLECULE_TYPE: &str = "protein";

/// Tab-separated job table, one row per chain.
///
/// The header is written on creation; rows are buffered until
/// [`finish`](JobTable::finish).
pub struct JobTable<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> JobTable<W> {
    pub fn new(writer: W) -> Result<Self, Error> {
        let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Appends the rows of `job`.
    pub fn write_job(&mut self, job: &JobDescriptor) -> Result<(), Error> {
        for chain in job.chain_records() {
            self.writer.write_record([
                job.name(),
                MOLECULE_TYPE,
                chain.id.as_str(),
                chain.entity.sequence.as_str(),
            ])?;
        }
        Ok(())
    }

    /// Flushes buffered rows to the underlying writer.
    pub fn finish(mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a header followed by the rows of every job.
pub fn write<'a, W, I>(writer: W, jobs: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = &'a JobDescriptor>,
{
    let mut table = JobTable::new(writer)?;
    for job in jobs {
        table.write_job(job)?;
    }
    table.finish()
}
