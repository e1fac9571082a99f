use crate::models::TestResponse;
use crate::routes;
use axum::Json;

/// GET /test handler - Connectivity check for clients
#[utoipa::path(
    get,
    path = routes::TEST,
    responses(
        (status = 200, description = "Endpoint reachable", body = TestResponse)
    ),
    tag = "info"
)]
pub async fn test_handler() -> Json<TestResponse> {
    Json(TestResponse::default())
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{json_body, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_test_endpoint() {
        let response = send("GET", "/test").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Test endpoint working"})
        );
    }

    #[tokio::test]
    async fn test_test_endpoint_rejects_put() {
        let response = send("PUT", "/test").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
