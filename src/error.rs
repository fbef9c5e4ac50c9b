use thiserror::Error;

/// Main error type for the table adapter.
/// Conversions themselves never fail; errors only come from range parsing and the sheet host.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0:#}")]
    HostError(#[from] anyhow::Error),

    #[error("{0}")]
    RangeError(#[from] crate::spreadsheet::range::RangeError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, TableError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| TableError::WithContextError(format!("{}: {}", message, e)))
    }
}
