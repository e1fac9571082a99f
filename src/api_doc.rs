use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, RootResponse, TestResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Engineer Challenge API",
        version = "0.1.0",
        description = "Static informational endpoints for the AI Engineer Challenge"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::test::test_handler
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            TestResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
