use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API-boundary errors, mapped onto the wire contract by [`IntoResponse`].
///
/// Per-probe failures never become an `AppError`; they degrade inside the
/// probe layer and the check still succeeds.
#[derive(Debug)]
pub enum AppError {
    /// The `domain` query parameter is absent or empty.
    MissingDomain,
    /// The input could not be reduced to a hostname.
    InvalidDomain,
    /// Anything unexpected past input validation. The message is exposed to
    /// the caller verbatim; caller and operator share a trust domain.
    Internal { details: String },
}

impl AppError {
    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal {
            details: details.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingDomain => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Domain is required" }),
            ),
            AppError::InvalidDomain => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid domain format" }),
            ),
            AppError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to check domain", "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_parts(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_domain_contract() {
        let (status, body) = response_parts(AppError::MissingDomain).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Domain is required" }));
    }

    #[tokio::test]
    async fn test_invalid_domain_contract() {
        let (status, body) = response_parts(AppError::InvalidDomain).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid domain format" }));
    }

    #[tokio::test]
    async fn test_internal_contract_exposes_details() {
        let (status, body) = response_parts(AppError::internal("client build failed")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Failed to check domain", "details": "client build failed" })
        );
    }
}
