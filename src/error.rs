use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Routing errors surfaced to clients
///
/// The handlers themselves never fail; these are produced by the router
/// fallbacks and rendered as a JSON body with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path
    NotFound,
    /// The path exists but not for this HTTP method
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };

        let body = Json(ErrorResponse {
            detail: detail.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn into_parts(err: ApiError) -> (StatusCode, Option<String>, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_json() {
        let (status, content_type, body) = into_parts(ApiError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body.detail, "Not Found");
    }

    #[tokio::test]
    async fn test_method_not_allowed_renders_json() {
        let (status, _, body) = into_parts(ApiError::MethodNotAllowed).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body.detail, "Method Not Allowed");
    }
}
