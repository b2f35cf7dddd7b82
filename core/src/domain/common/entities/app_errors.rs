use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("parameter '{0}' must not be supplied more than once")]
    InvalidParameterShape(String),

    #[error("invalid search term: {0}")]
    InvalidSearchTerm(String),

    #[error("{0}")]
    NotFound(String),

    #[error("object storage error: {0}")]
    ObjectStorageError(String),

    #[error("internal server error")]
    InternalServerError,
}
