use thiserror::Error;

/// Errors that can occur while loading metrics or rendering charts
#[derive(Debug, Error)]
pub enum PlotError {
    /// I/O error (missing input file, unwritable output path, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error (malformed row, missing column, wrong type)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset is structurally unusable (no rows)
    #[error("Empty dataset: {0}")]
    Empty(String),

    /// Chart rendering error
    #[error("Render error: {0}")]
    Render(String),
}

/// Type alias for Results using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
