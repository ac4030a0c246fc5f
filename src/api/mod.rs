pub mod server;
pub mod upload;

use crate::analysis::AnalysisError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub use server::{router, serve, AppState};

/// Result type returned by the upload handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors. Everything except `Analysis` and `Upload` is an
/// upload validation failure reported under `detail`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file provided")]
    NoFile,

    #[error("Invalid file format")]
    InvalidFormat,

    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Invalid file format. Only .bam files are supported.")]
    NotBam,

    #[error("Invalid FASTA sequence content")]
    InvalidFasta,

    #[error("Invalid FASTA DNA sequence content")]
    InvalidDna,

    #[error("Invalid BAM file")]
    InvalidBam,

    #[error("{0}")]
    Analysis(String),

    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upload(err) => err.status(),
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Analysis(message) => {
                log::error!("Analysis failed: {}", message);
                json!({ "error": message })
            }
            ApiError::Upload(err) => {
                log::warn!("Rejected upload: {}", err);
                json!({ "detail": err.body_text() })
            }
            other => {
                log::warn!("Rejected upload: {}", other);
                json!({ "detail": other.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidFasta(reason) => {
                log::error!("Error reading FASTA: {}", reason);
                ApiError::InvalidFasta
            }
            AnalysisError::InvalidDna => ApiError::InvalidDna,
            AnalysisError::InvalidBam(reason) => {
                log::error!("Error reading BAM file: {}", reason);
                ApiError::InvalidBam
            }
            other => ApiError::Analysis(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Analysis(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Analysis(format!("analysis task failed: {}", err))
    }
}
