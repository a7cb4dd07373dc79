//! crates/study_planner_core/src/planner/prompt.rs
//!
//! Builds the instruction sent to the model for one plan.

/// System message sent alongside every planning prompt.
pub const SYSTEM_INSTRUCTIONS: &str = "You output strict JSON only.";

/// Formats the planning prompt for `days` days of `minutes` study each.
///
/// Subject and study mode are inserted verbatim.
pub fn build_prompt(subject: &str, study_mode: &str, days: i64, minutes: u32) -> String {
    format!(
        r#"You are an expert academic study planner.

Generate study content ONLY. Do NOT number days.
Return ONLY valid JSON. No markdown. No explanations.

SUBJECT: {subject}
STUDY MODE: {study_mode}
TOTAL DAYS: {days}
DAILY STUDY MINUTES: {minutes}

RULES:
- Generate exactly {days} day objects in the "plan" array
- Each object represents ONE day of study
- Do NOT include dates or day numbers
- Focus on logical topic progression
- Use realistic time allocation within the daily study minutes

FORMAT:
{{
  "plan": [
    {{
      "focus": "Topic name",
      "objective": "Learning goal",
      "concepts": ["Concept A", "Concept B"],
      "activities": ["Read", "Practice", "Recall"],
      "time_allocation": {{
        "concepts_minutes": 60,
        "practice_minutes": 60,
        "revision_minutes": 30
      }},
      "outcome_check": "Verification method"
    }}
  ]
}}"#
    )
}
