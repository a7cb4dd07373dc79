//! crates/study_planner_core/src/planner/mod.rs
//!
//! Runs one plan request end to end: date range, prompt, model call, reply
//! parsing and day sequencing.

pub mod dates;
pub mod parser;
pub mod prompt;
pub mod sequencer;

pub use dates::days_until;
pub use parser::{parse_model_response, FallbackReason, ParsedPlan};
pub use prompt::build_prompt;
pub use sequencer::{revision_type_for, sequence_days};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{PlanRequest, StudyPlan};
use crate::ports::{PlanGenerationService, PortResult};

/// Generates the study plan for `request`, counting days from `today`.
///
/// Returns an empty plan without contacting the model when the exam is today
/// or in the past, and an empty plan when the model's reply is unusable.
/// Failures of the model call itself are returned as errors.
pub async fn generate_study_plan(
    model: &dyn PlanGenerationService,
    request: &PlanRequest,
    today: NaiveDate,
) -> PortResult<StudyPlan> {
    request.validate()?;

    let days_left = days_until(today, request.exam_date);
    if days_left <= 0 {
        info!(
            "Exam date {} is not after {}; returning an empty plan.",
            request.exam_date, today
        );
        return Ok(StudyPlan::empty());
    }

    let total_minutes = request.total_minutes();
    info!(
        subject = %request.subject,
        days_left,
        total_minutes,
        "Generating study plan"
    );

    let prompt = build_prompt(&request.subject, &request.study_mode, days_left, total_minutes);
    debug!("Planning prompt is {} characters long", prompt.len());

    let raw = model.generate_plan_content(&prompt).await?;

    let ai_days = match parse_model_response(&raw) {
        ParsedPlan::Days(days) => days,
        ParsedPlan::Fallback(reason) => {
            warn!("Discarding model reply, {}", reason);
            return Ok(StudyPlan::empty());
        }
    };

    if (ai_days.len() as i64) < days_left {
        warn!(
            "Model returned {} of {} days; repeating the last entry for the rest.",
            ai_days.len(),
            days_left
        );
    }

    let plan = StudyPlan::new(sequence_days(&ai_days, days_left, today, total_minutes));
    info!("Study plan ready with {} days", plan.len());
    Ok(plan)
}
