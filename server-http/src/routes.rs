use crate::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Employee CRUD routes
        .route("/api/v1/employees", get(handlers::list_employees))
        .route("/api/v1/employees", post(handlers::create_employee))
        .route("/api/v1/employees/{id}", get(handlers::get_employee))
        .route("/api/v1/employees/{id}", put(handlers::update_employee))
        .route("/api/v1/employees/{id}", delete(handlers::delete_employee))
        // Interactive API documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
