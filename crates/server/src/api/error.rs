//! API 错误类型。

use annotator_api_types::ErrorResponse;
use annotator_core::DomainError;
use annotator_storage::StoreError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// API 错误，携带状态码与 JSON 错误体。
#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: String,
    status: StatusCode,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, message: String) -> Self {
        Self {
            message,
            code: code.to_string(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidFilename(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "INVALID_FILENAME", err.to_string())
            }
            DomainError::InvalidAnnotationName(_) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_ANNOTATION_NAME",
                err.to_string(),
            ),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // 越界路径与不存在的文件一样返回 404
            StoreError::NotFound(name) | StoreError::InvalidPath(name) => ApiError::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("File not found: {}", name),
            ),
            StoreError::InvalidAnnotation(e) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_ANNOTATION",
                format!("Annotation is not valid JSON: {}", e),
            ),
            StoreError::Domain(e) => e.into(),
            StoreError::Io(e) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                format!("IO error: {}", e),
            ),
            StoreError::Json(e) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "CORRUPT_ANNOTATION",
                format!("Stored annotation is not valid JSON: {}", e),
            ),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::new(err.status(), "INVALID_MULTIPART", err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = %self.code, message = %self.message, "request failed");
        }
        let body = Json(ErrorResponse {
            code: self.code,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
