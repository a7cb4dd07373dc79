//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the study client and the API
//! server, other than the plan itself (which is the core `StudyPlan`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use study_planner_core::{BreakStrategy, PlanRequest};
use utoipa::ToSchema;

/// Keys that must be present in a plan generation request, in the order they
/// are checked.
pub const REQUIRED_PLAN_FIELDS: [&str; 4] = ["subject", "exam_date", "hours", "study_mode"];

//=========================================================================================
// Requests
//=========================================================================================

/// Body of `POST /generate-plan`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct GeneratePlanRequest {
    /// What the exam is about, e.g. "Data Structures".
    pub subject: String,
    /// Exam day in ISO-8601 form (`YYYY-MM-DD`).
    pub exam_date: NaiveDate,
    /// Daily study hours.
    pub hours: f64,
    /// Free text, e.g. "Concept Learning", "Exam Revision" or "Practice-Focused".
    pub study_mode: String,
}

impl From<GeneratePlanRequest> for PlanRequest {
    fn from(req: GeneratePlanRequest) -> Self {
        PlanRequest {
            subject: req.subject,
            exam_date: req.exam_date,
            hours: req.hours,
            study_mode: req.study_mode,
        }
    }
}

/// Query string of `GET /break-strategy`.
#[derive(Deserialize, Debug)]
pub struct BreakStrategyQuery {
    pub hours: f64,
}

//=========================================================================================
// Responses
//=========================================================================================

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error payload returned with every 4xx/5xx response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct BreakStrategyResponse {
    /// One of `light`, `pomodoro`, `deep_focus`.
    #[schema(value_type = String)]
    pub strategy: BreakStrategy,
    pub description: String,
}

impl From<BreakStrategy> for BreakStrategyResponse {
    fn from(strategy: BreakStrategy) -> Self {
        Self {
            strategy,
            description: strategy.description().to_string(),
        }
    }
}
