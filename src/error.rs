use std::io;
use std::path::PathBuf;

/// Failures while reading the labeled dataset.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("cannot open dataset {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("training failed: {0}")]
    Training(String),
    #[error("record has {found} attributes, expected {expected}")]
    Schema { expected: usize, found: usize },
    #[error("evaluation set is empty")]
    EmptySet,
    #[error("invalid value {value} for attribute `{name}`")]
    InvalidAttribute { name: &'static str, value: f64 },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field}: `{input}` is not a number")]
    InvalidInput { field: &'static str, input: String },
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
