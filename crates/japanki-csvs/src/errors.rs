use std::path::PathBuf;
use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file_type}: missing required header '{header}'")]
    MissingHeader {
        file_type: String,
        header: &'static str,
    },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Invalid category '{value}' at line {line}")]
    InvalidCategory { line: u64, value: String },

    #[error("Refusing to overwrite the source table: {0}")]
    OutputOverwritesInput(PathBuf),
}

impl CsvError {
    /// Classify a reader error, attributing row-level failures to their line
    pub(crate) fn from_row(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |pos| pos.line());
        Self::at_line(err, line)
    }

    /// Like [`Self::from_row`] for errors that carry no position of their own
    pub(crate) fn at_line(err: csv::Error, line: u64) -> Self {
        let reason = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Some(format!("expected {} fields, found {}", expected_len, len)),
            csv::ErrorKind::Deserialize { err: de, .. } => Some(de.to_string()),
            csv::ErrorKind::Utf8 { err: utf8, .. } => Some(utf8.to_string()),
            _ => None,
        };

        match reason {
            Some(reason) => CsvError::MalformedRow { line, reason },
            None => CsvError::Csv(err),
        }
    }
}
