// Facade errors - everything the HTTP layer can answer with besides success
//
// NotFound is an expected outcome, not a fault. Internal carries a short
// diagnostic for the `error` member and never a stack trace.

use thiserror::Error;

use crate::envelope::ApiResponse;
use crate::query::QueryError;

pub const NOT_FOUND_MESSAGE: &str = "Neighborhood not found";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

// Per-route messages for unexpected faults
pub const LIST_FAILED_MESSAGE: &str = "Error fetching neighborhoods";
pub const LOOKUP_FAILED_MESSAGE: &str = "Error fetching neighborhood";
pub const SEARCH_FAILED_MESSAGE: &str = "Error searching neighborhoods";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", ROUTE_NOT_FOUND_MESSAGE)]
    RouteNotFound,

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::internal_with(INTERNAL_MESSAGE, detail)
    }

    pub fn internal_with(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound | ApiError::RouteNotFound => 404,
            ApiError::Internal { .. } => 500,
        }
    }

    /// Envelope body for this error
    pub fn envelope(&self) -> ApiResponse<()> {
        match self {
            ApiError::NotFound => ApiResponse::failure(NOT_FOUND_MESSAGE),
            ApiError::RouteNotFound => ApiResponse::failure(ROUTE_NOT_FOUND_MESSAGE),
            ApiError::Internal { message, detail } => {
                ApiResponse::failure(message.clone()).with_error(detail.clone())
            }
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound(_) => ApiError::NotFound,
        }
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse;

        let status = axum::http::StatusCode::from_u16(self.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        if let ApiError::Internal { detail, .. } = &self {
            tracing::error!(%detail, "Request failed");
        }

        (status, axum::Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_query_error() {
        let err: ApiError = QueryError::NotFound("99".to_string()).into();
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.envelope().message.as_deref(), Some("Neighborhood not found"));
        assert_eq!(err.envelope().error, None);
    }

    #[test]
    fn test_internal_envelope_carries_diagnostic() {
        let err = ApiError::internal("dataset unavailable");
        let envelope = err.envelope();

        assert_eq!(err.status_code(), 500);
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Internal server error"));
        assert_eq!(envelope.error.as_deref(), Some("dataset unavailable"));
    }

    #[test]
    fn test_internal_with_route_message() {
        let err = ApiError::internal_with(SEARCH_FAILED_MESSAGE, "boom");
        let envelope = err.envelope();

        assert_eq!(err.status_code(), 500);
        assert_eq!(envelope.message.as_deref(), Some("Error searching neighborhoods"));
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }
}
