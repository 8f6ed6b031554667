use thiserror::Error;

/// Errors raised while loading the sales ledger.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row failed type coercion or date validation. The message names
    /// the offending line.
    #[error("Parse error: {0}")]
    Parse(String),
}
