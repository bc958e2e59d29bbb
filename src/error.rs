use poem::error::ResponseError;
use poem::http::StatusCode;
use thiserror::Error;

/// Record-level failures of the feature codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid record: unknown {field} `{value}`")]
    InvalidRecord { field: &'static str, value: String },

    #[error("invalid record: `{field}` must be positive, got `{value}`")]
    NonPositive { field: &'static str, value: String },
}

impl CodecError {
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidRecord {
            field,
            value: value.to_string(),
        }
    }
}

/// Regression engine failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("vector #{index} has {actual} features, expected {expected}")]
    InconsistentVectorLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Everything the prediction service may answer with instead of a result.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Model not trained")]
    ModelNotTrained,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Training failed: {0}")]
    TrainingFailed(#[from] FitError),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ServiceError {
    pub fn invalid_request(message: impl ToString) -> Self {
        Self::InvalidRequest(message.to_string())
    }
}

impl From<CodecError> for ServiceError {
    fn from(error: CodecError) -> Self {
        Self::invalid_request(error)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_request(error)
    }
}

impl ResponseError for ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ModelNotTrained | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::TrainingFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
