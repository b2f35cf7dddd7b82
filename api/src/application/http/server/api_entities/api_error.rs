use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orderdesk_core::domain::common::entities::app_errors::CoreError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidParameter(_)
            | CoreError::InvalidParameterShape(_)
            | CoreError::InvalidSearchTerm(_) => ApiError::BadRequest(error.to_string()),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::ObjectStorageError(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_failures_map_to_bad_request() {
        for error in [
            CoreError::InvalidParameter("page must be a positive integer".to_string()),
            CoreError::InvalidParameterShape("status".to_string()),
            CoreError::InvalidSearchTerm("bad".to_string()),
        ] {
            assert!(matches!(ApiError::from(error), ApiError::BadRequest(_)));
        }
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let error = CoreError::NotFound("order x not found".to_string());
        assert!(matches!(ApiError::from(error), ApiError::NotFound(_)));
    }
}
