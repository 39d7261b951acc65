use thiserror::Error;

use crate::domain::types::LocationKey;

/// Broad classification of a [`TourError`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    NotFound,
    InvalidArgument,
    IndexOutOfBounds,
    Io,
}

#[derive(Error, Debug)]
pub enum TourError {
    #[error("invalid location field \"{field}\": {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("input is missing the required \"{0}\" column")]
    MissingColumn(String),

    #[error("duplicate location found: {0}")]
    Duplicate(LocationKey),

    #[error("{0} is not a location in this country")]
    NotFound(LocationKey),

    #[error("country contains no depots")]
    NoDepots,

    #[error("speed must be non-zero")]
    ZeroSpeed,

    #[error("speed must be a finite positive number of metres per second, got {0}")]
    InvalidSpeed(f64),

    #[error("{0} is not a depot")]
    NotADepot(LocationKey),

    #[error("location index {index} is out of bounds for a country of {len} locations")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("row {row} ({location:?}): {source}")]
    InvalidRow {
        row: usize,
        location: String,
        #[source]
        source: Box<TourError>,
    },

    #[error("config value for {key} ({value}) is invalid: {message}")]
    Config {
        key: String,
        value: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TourError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourError::Validation { .. }
            | TourError::MissingColumn(_)
            | TourError::Config { .. } => ErrorKind::Validation,
            TourError::Duplicate(_) => ErrorKind::Duplicate,
            TourError::NotFound(_) | TourError::NoDepots => ErrorKind::NotFound,
            TourError::ZeroSpeed | TourError::InvalidSpeed(_) | TourError::NotADepot(_) => {
                ErrorKind::InvalidArgument
            }
            TourError::InvalidRow { source, .. } => source.kind(),
            TourError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            TourError::Io(_) | TourError::Csv(_) | TourError::Json(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
