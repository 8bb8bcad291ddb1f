use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    problem_instance::problem_instance_middleware,
    request_id::{make_span_with_request_id, request_id_middleware},
};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Actuator
        .route("/actuator/health", get(handlers::health))
        .route("/actuator/health/liveness", get(handlers::liveness))
        .route("/actuator/health/readiness", get(handlers::health))
        // Customers
        .route("/api/customers/:id", get(handlers::get_customer))
        .route("/api/customers/:id/genre", patch(handlers::update_genre))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(middleware::from_fn(problem_instance_middleware)),
        )
        .with_state(state)
}
