//! Error types for the person directory HTTP API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Failed to decode JSON: {0}")]
    InvalidJson(String),

    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },

    #[error("Invalid person id: {0}")]
    InvalidId(String),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Person not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidJson(_) | ApiError::InvalidId(_) | ApiError::EmptyName => {
                StatusCode::BAD_REQUEST
            }
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnsupportedMediaType => "unsupported_media_type",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::BodyRejected { .. } => "invalid_body",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::EmptyName => "invalid_name",
            ApiError::NotFound(_) => "not_found",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

// Missing or wrong Content-Type is a 415. A body that could not be read
// (e.g. over the size limit) keeps axum's status; every other body problem is
// the client's JSON, including well-formed JSON lacking `name`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType,
            JsonRejection::BytesRejection(rejection) => ApiError::BodyRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            },
            other => ApiError::InvalidJson(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code()
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::InvalidJson("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidId("abc".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EmptyName.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("9".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_is_exposed() {
        let err = ApiError::Storage(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Storage error: "));
        assert!(err.to_string().len() > "Storage error: ".len());
    }

    #[tokio::test]
    async fn test_response_is_json() {
        let response = ApiError::NotFound("3".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["error"], "Person not found: 3");
    }
}
