use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::cors;
use crate::handlers;
use crate::routes;

/// Create the API router
///
/// Fallbacks are registered before the layers so that 404 and 405 responses
/// pass through the CORS middleware as well.
pub fn build_router() -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::TEST, get(handlers::test_handler))
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, ApiDoc::openapi()))
        .merge(Redoc::with_url(routes::REDOC, ApiDoc::openapi()))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(middleware::from_fn(cors::permissive_cors))
        .layer(TraceLayer::new_for_http())
}
