pub mod protocol;
pub mod rest;
pub mod state;

pub use rest::{
    break_strategy_handler, export_plan_handler, generate_plan_handler, health_handler,
};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Builds the API router. CORS and the Swagger UI are layered on by the binary.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/generate-plan", post(generate_plan_handler))
        .route("/export-plan", post(export_plan_handler))
        .route("/break-strategy", get(break_strategy_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
