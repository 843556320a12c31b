use thiserror::Error;

/// Errors surfaced by the guarded and replaying APIs.
/// The core diff itself is total and never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The LCS table for the inputs would exceed the configured limit.
    #[error("diff table too large: {cells} cells (limit {limit})")]
    TableTooLarge { cells: usize, limit: usize },

    /// A kept or removed run does not match the input it is replayed over.
    #[error("run {index} does not match input at offset {offset}")]
    Mismatch { index: usize, offset: usize },

    /// Runs ended before the whole input was consumed.
    #[error("input left unconsumed from offset {offset}")]
    Unconsumed { offset: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("cannot parse options: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        DiffError::Config(err.to_string())
    }
}
