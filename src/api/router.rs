use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::middleware::{logging_middleware, security_headers_middleware, MAX_BODY_SIZE};
use super::products;
use super::state::AppState;
use super::types::ApiError;
use super::users;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .merge(users::create_user_router())
        .merge(products::create_product_router())
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Handler for paths no route matches
async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
