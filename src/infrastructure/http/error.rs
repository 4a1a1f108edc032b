//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 合成失败时返回给客户端的统一信息，具体原因只写日志
pub const SYNTHESIS_FAILED_MESSAGE: &str = "Failed to generate speech";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            other => {
                tracing::error!(error = %other, "Speech synthesis failed");
                ApiError::Internal(SYNTHESIS_FAILED_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ApplicationError::validation("Text is required").into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Text is required"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_failures_hide_details() {
        let err: ApiError = ApplicationError::SynthesisFailed {
            index: 3,
            message: "CUDA out of memory".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Internal(ref m) if m == SYNTHESIS_FAILED_MESSAGE));

        let err: ApiError = ApplicationError::CombineFailed("mismatch".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
