use crate::io::error::Error;
use crate::model::job::JobDescriptor;
use crate::model::record::SequenceRecord;
use bio::io::fasta;
use std::io::Write;

/// Residues per sequence line.
pub const LINE_WIDTH: usize = 60;

pub fn write<W: Write>(writer: W, records: &[SequenceRecord]) -> Result<(), Error> {
    let mut out = fasta::Writer::new(writer);
    for record in records {
        write_record(&mut out, &record.id, &record.sequence)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one record per chain of `job`.
pub fn write_job<W: Write>(writer: W, job: &JobDescriptor) -> Result<(), Error> {
    let mut out = fasta::Writer::new(writer);
    for chain in job.chain_records() {
        write_record(&mut out, &chain.id, &chain.entity.sequence)?;
    }
    out.flush()?;
    Ok(())
}

fn write_record<W: Write>(
    out: &mut fasta::Writer<W>,
    id: &str,
    sequence: &str,
) -> Result<(), Error> {
    out.write(id, None, wrap(sequence).as_bytes())?;
    Ok(())
}

/// Breaks `sequence` into lines of [`LINE_WIDTH`] characters.
fn wrap(sequence: &str) -> String {
    let mut wrapped = String::with_capacity(sequence.len() + sequence.len() / LINE_WIDTH);
    for (i, c) in sequence.chars().enumerate() {
        if i > 0 && i % LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fasta::reader;
    use crate::model::job::{EntityAssignment, START_RESIDUE};
    use std::io::Cursor;

    fn job() -> JobDescriptor {
        JobDescriptor::new(vec![
            EntityAssignment {
                name: "X".into(),
                chain_names: vec!["A".into(), "B".into()],
                start_res: START_RESIDUE,
                sequence: "MKV".into(),
            },
            EntityAssignment {
                name: "Y".into(),
                chain_names: vec!["C".into()],
                start_res: START_RESIDUE,
                sequence: "GSS".into(),
            },
        ])
        .with_suffix("tmpl")
    }

    #[test]
    fn writes_one_record_per_chain() {
        let mut out = Vec::new();
        write_job(&mut out, &job()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            ">2X_1Y_tmpl_X_1\nMKV\n>2X_1Y_tmpl_X_2\nMKV\n>2X_1Y_tmpl_Y\nGSS\n"
        );
    }

    #[test]
    fn wraps_long_sequences() {
        let sequence = "A".repeat(130);
        let mut out = Vec::new();
        write(&mut out, &[SequenceRecord::new("long", sequence.clone())]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[3].len(), 10);

        let back = reader::read(Cursor::new(text)).unwrap();
        assert_eq!(back[0].sequence, sequence);
    }

    #[test]
    fn wraps_on_character_boundaries() {
        let sequence = format!("{}é{}", "A".repeat(59), "B".repeat(5));
        let mut out = Vec::new();
        write(&mut out, &[SequenceRecord::new("u", sequence.clone())]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].chars().count(), 60);
        assert!(lines[1].ends_with('é'));

        let back = reader::read(Cursor::new(text)).unwrap();
        assert_eq!(back[0].sequence, sequence);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let mut out = Vec::new();
        write(&mut out, &[SequenceRecord::new("e", ""), SequenceRecord::new("f", "M")]).unwrap();
        let back = reader::read(Cursor::new(out)).unwrap();
        assert_eq!(
            back,
            vec![SequenceRecord::new("e", ""), SequenceRecord::new("f", "M")]
        );
    }
}
