use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for paths with no route
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
