use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("{what} row {row} has {found} bins, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} references, hit matrix has {found} rows")]
    ReferenceCountMismatch { expected: usize, found: usize },

    #[error("{0} bins do not fit a 32-bit bin index")]
    TooManyBins(usize),

    #[error("reference declared twice: {0}")]
    DuplicateReference(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
