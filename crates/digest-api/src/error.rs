use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use digest_workflow::StageError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Please upload a .pdf file.")]
    NotPdf,

    #[error("The uploaded file is empty.")]
    EmptyUpload,

    #[error("Failed to read upload: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    #[error("{0}")]
    Stage(#[from] StageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::NotPdf | ApiError::EmptyUpload => StatusCode::BAD_REQUEST,
            ApiError::Upload(e) => e.status(),
            ApiError::Stage(StageError::InvalidName(_)) => StatusCode::BAD_REQUEST,
            ApiError::Stage(StageError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotPdf.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Stage(StageError::InvalidName("..".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        let io = StageError::Io {
            path: "temp".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(ApiError::Stage(io).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_json_body() {
        let response = ApiError::EmptyUpload.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "The uploaded file is empty.");
    }
}
