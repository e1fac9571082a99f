use crate::models::RootResponse;
use crate::routes;
use axum::Json;

/// GET / handler - Service banner
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "info"
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::default())
}
