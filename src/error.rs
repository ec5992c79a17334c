use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything the UI surface can answer with, split between user mistakes
/// (400) and prediction-service trouble (502).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upload the image first")]
    NoImage,
    #[error("unsupported file type, expected PNG or JPEG")]
    UnsupportedFileType,
    #[error("failed to read upload: {0}")]
    Upload(String),
    #[error("prediction service request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("prediction service returned {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("prediction service returned an unreadable response: {0}")]
    UpstreamBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoImage | ApiError::UnsupportedFileType | ApiError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) | ApiError::UpstreamStatus(_) | ApiError::UpstreamBody(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
