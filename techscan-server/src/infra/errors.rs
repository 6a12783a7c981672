use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use techscan_core::ScanError;

pub type AppResult<T> = Result<T, AppError>;

/// HTTP-facing error: a status code plus a problem-details style body.
///
/// `detail` for 500s is always the generic message; the real cause is logged
/// server-side and never leaked to the caller.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
}

impl AppError {
    pub fn new(
        status: StatusCode,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(StatusCode::BAD_REQUEST, title, detail)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred while scanning the directory.",
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "title": self.title,
            "detail": self.detail,
            "status": self.status.as_u16(),
        }));

        (self.status, body).into_response()
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::InvalidPath(detail) => {
                Self::bad_request("Invalid Argument", detail)
            }
            other => {
                tracing::error!(error = %other, "scan failed unexpectedly");
                Self::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_maps_to_bad_request() {
        let err: AppError =
            ScanError::InvalidPath("bad path".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.title, "Invalid Argument");
        assert_eq!(err.detail, "bad path");
    }

    #[test]
    fn internal_errors_keep_a_generic_detail() {
        let err: AppError =
            ScanError::Internal("worker panicked".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.detail.contains("worker panicked"));
    }
}
