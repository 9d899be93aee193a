use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_engine_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use stoich_forge::io::{Error as IoError, Format};

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, record, .. } => {
                self.add(format!("Problem in record {record} of the {format} input"));
                if *format == Format::Fasta {
                    self.add("Every record must start with a '>' header line");
                    self.add("Sequence lines must follow their header");
                }
            }

            IoError::Csv(_) => {
                self.add("The TSV table could not be written");
                self.add("Check available disk space and permissions");
            }

            IoError::Json(_) => {
                self.add("A job descriptor could not be serialized");
                self.add("This is likely a bug, please report it if reproducible");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid data (is it UTF-8 text?)");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_engine_hints(&mut self, err: &Error) {
        use stoich_forge::EngineError;

        let Some(engine_err) = err.downcast_ref::<EngineError>() else {
            return;
        };

        self.mark_typed();

        match engine_err {
            EngineError::MalformedStoichiometry(parse) => {
                self.add(format!("Could not read '{}'", parse.input()));
                self.add("Write the stoichiometry as <count><letter> tokens, e.g. 5A4B3C");
                self.add("Counts must be at least 1");
            }

            EngineError::TooManyEntities { count, capacity } => {
                self.add(format!(
                    "The FASTA file holds {count} records; letters cover only {capacity}"
                ));
                self.add("Split the input into files of at most 26 sequences");
                self.add("Or use 'sforge multisets', which labels records by id");
            }

            EngineError::MissingSequence(label) => {
                self.add(format!("Entity '{label}' has no record in the FASTA file"));
                self.add("Letters refer to records by position: A is the first, B the second");
            }

            EngineError::InsufficientLabelCapacity { needed, available } => {
                self.add(format!(
                    "{needed} target chains need ids but only {available} characters remain"
                ));
                self.add("Try --policy sequential, which does not skip template letters");
            }

            EngineError::InvalidSizeRange { .. } => {
                self.add("--min-size must be at least 1 and not above --max-size");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            return;
        }

        if msg.contains("toml") || msg.contains("config") {
            self.add("The workflow config needs output_dir and tmp_dir keys");
            self.add("Example: output_dir = \"results\"");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = err.to_string();

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    use stoich_forge::EngineError;

    #[test]
    fn engine_errors_get_typed_hints() {
        let err = Error::new(EngineError::MissingSequence("C".into())).context("Failed to build job");
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints[0].contains("'C'"));
    }

    #[test]
    fn config_errors_fall_back_to_text_hints() {
        let err = anyhow::anyhow!("'output_dir' or 'tmp_dir' is missing in the config file");
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("output_dir")));
    }

    #[test]
    fn chain_text_includes_causes() {
        let err = anyhow::anyhow!("Inner").context("Outer");
        assert_eq!(error_chain_text(&err), "outer\ninner");
    }
}
