//! crates/study_planner_core/src/export.rs
//!
//! Plain-text rendering of a plan for download.

use crate::domain::StudyPlan;

/// File name offered to the browser for the text download.
pub const EXPORT_FILE_NAME: &str = "StudyPilot_Study_Plan.txt";

/// One `"<day> - <focus>"` line per day, newline separated.
pub fn render_plain_text(plan: &StudyPlan) -> String {
    plan.days
        .iter()
        .map(|day| format!("{} - {}", day.day, day.focus))
        .collect::<Vec<_>>()
        .join("\n")
}
