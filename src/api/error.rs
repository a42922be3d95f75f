use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::catalog::CatalogError;
use crate::recommend::{InvalidEmotion, ResolveError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("TMDB access token is not configured")]
    Configuration,
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    InvalidEmotion(#[from] InvalidEmotion),
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },
}

impl AppError {
    pub fn upstream(context: &str, e: CatalogError) -> Self {
        AppError::Upstream {
            status: e.status(),
            message: format!("{}: {}", context, e),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) | AppError::InvalidEmotion(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status: Some(404), .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { status: Some(429), .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream { status: Some(_), .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status: None, .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Error envelope without result fields.
    pub fn bare(self) -> ErrorResponse {
        ErrorResponse { error: self, shape: Shape::Bare }
    }

    /// Error envelope shaped like an empty recommendation page.
    pub fn paged(self, current_page: u32) -> ErrorResponse {
        ErrorResponse { error: self, shape: Shape::Page(current_page) }
    }

    /// Error envelope shaped like an empty search result.
    pub fn listed(self) -> ErrorResponse {
        ErrorResponse { error: self, shape: Shape::List }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::PageOutOfRange(page) => {
                AppError::InvalidInput(format!("Page {} is out of range", page))
            }
            ResolveError::Upstream(e) => AppError::upstream("Failed to fetch recommendations", e),
        }
    }
}

#[derive(Debug)]
enum Shape {
    Bare,
    Page(u32),
    List,
}

#[derive(Debug)]
pub struct ErrorResponse {
    error: AppError,
    shape: Shape,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.error, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.error, "Rejected request");
        }

        let message = self.error.to_string();
        let body = match self.shape {
            Shape::Bare => json!({ "error": message }),
            Shape::Page(current_page) => json!({
                "error": message,
                "results": [],
                "total_results": 0,
                "total_pages": 0,
                "current_page": current_page,
            }),
            Shape::List => json!({
                "error": message,
                "results": [],
                "total_results": 0,
                "total_pages": 0,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Configuration.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::InvalidInput("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(InvalidEmotion("Galit".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        let upstream = |status| AppError::Upstream { status, message: String::new() };
        assert_eq!(upstream(Some(404)).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(upstream(Some(429)).status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(upstream(Some(401)).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream(None).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_page_out_of_range_is_client_error() {
        let e = AppError::from(ResolveError::PageOutOfRange(900));
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
    }
}
