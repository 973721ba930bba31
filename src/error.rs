//! Error handling

use thiserror::Error;

use crate::constants::PREDICTION_UNAVAILABLE;

/// Tabular ingestion errors
///
/// Reported inline next to the input; never mutate dashboard state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("CSV input is empty")]
    EmptyInput,

    #[error("CSV must contain a header row and one data row")]
    MissingDataRow,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has an invalid number: '{value}'")]
    InvalidNumber { column: String, value: String },

    #[error("Machine ID must not be empty")]
    EmptyId,
}

/// Scoring client errors
///
/// The cause is kept for logging only; the UI gets `user_message()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl PredictError {
    pub fn user_message(&self) -> &'static str {
        PREDICTION_UNAVAILABLE
    }
}

/// Submission errors surfaced to the command layer
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid reading: {0}")]
    InvalidReading(#[from] validator::ValidationErrors),

    #[error("{}", PREDICTION_UNAVAILABLE)]
    PredictionUnavailable(#[source] PredictError),

    #[error("Submission {0} was superseded by a newer one")]
    Superseded(u64),
}

impl From<PredictError> for SubmitError {
    fn from(err: PredictError) -> Self {
        SubmitError::PredictionUnavailable(err)
    }
}

pub type PredictResult<T> = Result<T, PredictError>;
