use thiserror::Error;

/// Faults inside the forecast computation.
///
/// Never escapes the forecast engine; every variant
/// collapses to the neutral result there.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("insufficient data: {len} prices")]
    InsufficientData { len: usize },

    #[error("non-finite {what}")]
    NonFinite { what: &'static str },

    #[error("division by zero in {what}")]
    DivisionByZero { what: &'static str },
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::BadRequest(_) | AppError::SerdeJson(_) => 2,
            AppError::NoData(_) => 3,
            AppError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
