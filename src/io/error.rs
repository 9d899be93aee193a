use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (record {record})")]
    Parse {
        format: Format,
        record: usize,
        details: String,
    },

    #[error("failed to write TSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize job descriptor as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: Format, record: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            record,
            details: details.into(),
        }
    }
}
