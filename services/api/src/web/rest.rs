//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::{
    protocol::{
        BreakStrategyQuery, BreakStrategyResponse, ErrorResponse, GeneratePlanRequest,
        HealthResponse, REQUIRED_PLAN_FIELDS,
    },
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde_json::Value;
use std::sync::Arc;
use study_planner_core::{
    export::{render_plain_text, EXPORT_FILE_NAME},
    generate_study_plan, BreakStrategy, PlanRequest, PortError, StudyPlan,
};
use tracing::{error, info, warn};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        generate_plan_handler,
        export_plan_handler,
        break_strategy_handler,
    ),
    components(
        schemas(GeneratePlanRequest, HealthResponse, ErrorResponse, BreakStrategyResponse)
    ),
    tags(
        (name = "StudyPilot API", description = "Exam study plan generation.")
    )
)]
pub struct ApiDoc;

type ApiFailure = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness check.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Backend is running".to_string(),
    })
}

/// Generate a day-by-day study plan.
///
/// Responds with `{"plan": [...]}`. The plan is empty when the exam date is
/// today or in the past, or when the model's reply could not be used.
#[utoipa::path(
    post,
    path = "/generate-plan",
    request_body = GeneratePlanRequest,
    responses(
        (status = 200, description = "The normalized plan, possibly empty"),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Model service failure", body = ErrorResponse)
    )
)]
pub async fn generate_plan_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StudyPlan>, ApiFailure> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected plan request body: {}", rejection.body_text());
        failure(rejection.status(), rejection.body_text())
    })?;

    let request = parse_plan_request(body)?;
    let today = app_state.clock.today();

    match generate_study_plan(app_state.plan_adapter.as_ref(), &request, today).await {
        Ok(plan) => {
            info!(
                "Returning a {}-day plan for '{}'",
                plan.len(),
                request.subject
            );
            Ok(Json(plan))
        }
        Err(PortError::InvalidInput(message)) => {
            Err(failure(StatusCode::BAD_REQUEST, message))
        }
        Err(e) => {
            error!("Failed to generate study plan: {:?}", e);
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Checks the required keys in order, then reads the typed request.
fn parse_plan_request(body: Value) -> Result<PlanRequest, ApiFailure> {
    let Some(object) = body.as_object() else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            "Request body must be a JSON object",
        ));
    };

    if let Some(missing) = REQUIRED_PLAN_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            format!("Missing field: {}", missing),
        ));
    }

    let request: GeneratePlanRequest = serde_json::from_value(body).map_err(|e| {
        failure(StatusCode::BAD_REQUEST, format!("Invalid request: {}", e))
    })?;
    Ok(request.into())
}

/// Download a plan as plain text.
///
/// Accepts a plan in the shape returned by `/generate-plan` and renders one
/// `"<day> - <focus>"` line per day.
#[utoipa::path(
    post,
    path = "/export-plan",
    request_body(content_type = "application/json", description = "A plan as returned by /generate-plan."),
    responses(
        (status = 200, description = "Plain-text plan", content_type = "text/plain")
    )
)]
pub async fn export_plan_handler(Json(plan): Json<StudyPlan>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        render_plain_text(&plan),
    )
}

/// Suggested break routine for a number of daily study hours.
#[utoipa::path(
    get,
    path = "/break-strategy",
    params(
        ("hours" = f64, Query, description = "Daily study hours.")
    ),
    responses(
        (status = 200, description = "Suggested routine", body = BreakStrategyResponse),
        (status = 400, description = "Hours missing or not positive", body = ErrorResponse)
    )
)]
pub async fn break_strategy_handler(
    query: Result<Query<BreakStrategyQuery>, QueryRejection>,
) -> Result<Json<BreakStrategyResponse>, ApiFailure> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected break strategy query: {}", rejection.body_text());
        failure(rejection.status(), rejection.body_text())
    })?;

    if !query.hours.is_finite() || query.hours <= 0.0 {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            "hours must be a positive number",
        ));
    }
    Ok(Json(BreakStrategy::for_hours(query.hours).into()))
}
