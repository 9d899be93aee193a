use crate::io::{Format, error::Error};
use crate::model::record::SequenceRecord;
use bio::io::fasta;
use std::io::BufRead;

/// Reads every record; the id is the first word of the header and all
/// whitespace inside the sequence is dropped.
pub fn read<R: BufRead>(mut reader: R) -> Result<Vec<SequenceRecord>, Error> {
    skip_leading_whitespace(&mut reader)?;
    let mut records = Vec::new();

    for result in fasta::Reader::new(reader).records() {
        let position = records.len() + 1;
        // Format problems carry a message payload; OS and decoding errors do not.
        let record = result.map_err(|e| {
            if e.get_ref().is_some() {
                Error::parse(Format::Fasta, position, e.to_string())
            } else {
                Error::Io { source: e }
            }
        })?;

        let sequence = std::str::from_utf8(record.seq())
            .map_err(|e| Error::parse(Format::Fasta, position, e.to_string()))?;
        records.push(SequenceRecord::new(
            record.id(),
            sequence
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>(),
        ));
    }

    Ok(records)
}

/// Blank lines before the first header are not part of any record.
fn skip_leading_whitespace<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let blank = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let reached_text = blank < buf.len();
        reader.consume(blank);
        if reached_text {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_multi_line_records() {
        let data = ">sp|P1| first protein\nMKV\nLAA\n\n>P2\nGS S\n";
        let records = read(Cursor::new(data)).unwrap();
        assert_eq!(
            records,
            vec![
                SequenceRecord::new("sp|P1|", "MKVLAA"),
                SequenceRecord::new("P2", "GSS"),
            ]
        );
    }

    #[test]
    fn keeps_sequence_case() {
        let records = read(Cursor::new(">x\nmkV\n")).unwrap();
        assert_eq!(records[0].sequence, "mkV");
    }

    #[test]
    fn header_without_sequence() {
        let records = read(Cursor::new(">empty\n>next\nM\n")).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
        assert_eq!(records[1].len(), 1);
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let records = read(Cursor::new("\n  \n>x\nM\n")).unwrap();
        assert_eq!(records, vec![SequenceRecord::new("x", "M")]);
    }

    #[test]
    fn empty_input() {
        assert!(read(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn sequence_before_header_is_an_error() {
        let err = read(Cursor::new("\nMKV\n>x\nM\n")).unwrap_err();
        match err {
            Error::Parse { format, record, .. } => {
                assert_eq!(format, Format::Fasta);
                assert_eq!(record, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let err = read(Cursor::new(b">x\nM\xff\n".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn keeps_non_ascii_sequence_text() {
        let records = read(Cursor::new(">u\nAé\nB\n")).unwrap();
        assert_eq!(records[0].sequence, "AéB");
    }
}
