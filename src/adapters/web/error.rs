//! API error type. Maps domain and request failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by a handler: status, client-facing message and a stable code.
#[derive(Debug, Clone, Error)]
#[error("[{status}] [{code}] {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: &'static str,
}

impl ApiError {
    fn with_code(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
        }
    }

    /// 400, for malformed uploads and form data.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    pub fn not_found(path: &str) -> Self {
        Self::with_code(
            StatusCode::NOT_FOUND,
            format!("Resource not found: {}", path),
            "NOT_FOUND",
        )
    }

    /// 422, for gender or dress code outside the enumeration.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::UNPROCESSABLE_ENTITY, message, "VALIDATION_ERROR")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_caller_error() {
            Self::validation(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "success": false,
            "error": self.message,
            "code": self.code,
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputField;

    #[test]
    fn test_invalid_input_maps_to_422() {
        let err: ApiError = DomainError::InvalidInput {
            field: InputField::Gender,
            value: "Alien".to_string(),
            allowed: vec!["Female".to_string(), "Male".to_string()],
        }
        .into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Invalid gender. Choose from: Female, Male");
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_other_domain_errors_map_to_500() {
        let err: ApiError = DomainError::Processing("disk full".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_display_includes_code() {
        let display = ApiError::not_found("/nope").to_string();
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("/nope"));
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::bad_request("No image selected").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
