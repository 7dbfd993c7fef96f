use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Duplicate element symbol '{symbol}' in dataset")]
    DuplicateSymbol { symbol: String },

    #[error("Unknown dataset format '{0}'. Expected 'json' or 'csv'.")]
    UnknownFormat(String),
}
