use thiserror::Error;

use backend_domain::EstimateError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<EstimateError> for AppError {
    fn from(value: EstimateError) -> Self {
        match value {
            EstimateError::NotFound(what) => AppError::NotFound(what),
            EstimateError::Upstream(message) => AppError::Upstream(message),
        }
    }
}
