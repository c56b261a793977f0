use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::forecast::ForecastError;
use crate::ingest::IngestError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid upload: {0}")]
    Ingest(#[from] IngestError),

    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        // Every failure here is caused by the uploaded input.
        StatusCode::BAD_REQUEST
    }

    pub fn response_message(&self) -> String {
        match self {
            ApiError::Forecast(e @ ForecastError::Data { .. }) => {
                format!("analysis failed: {}", e)
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.response_message();
        warn!("Request rejected ({}): {}", status.as_u16(), message);

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            timestamp: chrono::Local::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_are_prefixed() {
        let err = ApiError::from(ForecastError::Data {
            table: "sales".into(),
            row: 2,
            column: "date".into(),
            message: "date is empty".into(),
        });
        assert_eq!(
            err.response_message(),
            "analysis failed: sales row 2, column date: date is empty"
        );
    }

    #[test]
    fn schema_errors_pass_through() {
        let err = ApiError::from(ForecastError::Schema {
            table: "writeoffs".into(),
            missing: vec!["quantity".into()],
        });
        assert_eq!(
            err.response_message(),
            "writeoffs table is missing required columns: quantity"
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
