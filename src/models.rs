use serde::{Deserialize, Serialize};

/// Response type for the root endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    #[schema(example = "AI Engineer Challenge API")]
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        RootResponse {
            message: "AI Engineer Challenge API".to_string(),
            status: "running".to_string(),
        }
    }
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "API is healthy")]
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        HealthResponse {
            status: "ok".to_string(),
            message: "API is healthy".to_string(),
        }
    }
}

/// Response type for the test endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestResponse {
    #[schema(example = "Test endpoint working")]
    pub message: String,
}

impl Default for TestResponse {
    fn default() -> Self {
        TestResponse {
            message: "Test endpoint working".to_string(),
        }
    }
}
