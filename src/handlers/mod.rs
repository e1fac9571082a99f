pub mod root;
pub mod health;
pub mod test;
pub mod fallback;

pub use root::root_handler;
pub use health::health_handler;
pub use test::test_handler;
pub use fallback::{method_not_allowed_handler, not_found_handler};

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{body::Body, http::Request, response::Response};
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    /// Sends one request through a freshly built router
    pub async fn send(method: &str, uri: &str) -> Response {
        crate::app::build_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn json_body(response: Response) -> JsonValue {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}
