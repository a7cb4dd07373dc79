//! crates/study_planner_core/src/planner/sequencer.rs
//!
//! Normalizes model-supplied day content into exactly `days_left` dated,
//! tagged day records.
//!
//! The model decides *what* is studied; this module alone decides *when*.
//! Day numbers, dates and revision tags are derived from position, and any
//! date-like text from the model is dropped before it gets here.

use chrono::{Days, NaiveDate};

use crate::domain::{DayContent, DayRecord, RevisionType, TimeAllocation, DEFAULT_FOCUS};

/// Builds `days_left` records starting at `today`.
///
/// When the model supplied fewer entries than days, the last entry is reused
/// for every remaining day. With no entries at all every day gets default
/// content. Entries beyond `days_left` are ignored. Returns an empty list for
/// `days_left <= 0`.
pub fn sequence_days(
    ai_days: &[DayContent],
    days_left: i64,
    today: NaiveDate,
    total_minutes: u32,
) -> Vec<DayRecord> {
    let blank = DayContent::default();
    let fallback_allocation = TimeAllocation::fallback(total_minutes);

    let mut records = Vec::new();
    for idx in 0..days_left.max(0) {
        let Some(date) = u64::try_from(idx)
            .ok()
            .and_then(|offset| today.checked_add_days(Days::new(offset)))
        else {
            break;
        };

        let source = source_for(ai_days, idx).unwrap_or(&blank);
        records.push(DayRecord {
            day: format!("Day {} ({})", idx + 1, date.format("%Y-%m-%d")),
            focus: source
                .focus
                .clone()
                .unwrap_or_else(|| DEFAULT_FOCUS.to_string()),
            objective: source.objective.clone().unwrap_or_default(),
            concepts: source.concepts.clone().unwrap_or_default(),
            activities: source.activities.clone().unwrap_or_default(),
            time_allocation: source.time_allocation.unwrap_or(fallback_allocation),
            outcome_check: source.outcome_check.clone().unwrap_or_default(),
            revision_type: revision_type_for(idx, days_left),
        });
    }
    records
}

/// Entry `idx`, clamped to the last entry. `None` only when `ai_days` is empty.
fn source_for(ai_days: &[DayContent], idx: i64) -> Option<&DayContent> {
    let last = ai_days.len().checked_sub(1)?;
    let idx = usize::try_from(idx).unwrap_or(usize::MAX);
    ai_days.get(idx.min(last))
}

/// Tag for the zero-based day `idx` of a `days_left`-day plan.
///
/// The last two days are always final revision, which takes precedence over
/// the micro revision held every third day.
pub fn revision_type_for(idx: i64, days_left: i64) -> RevisionType {
    if idx >= days_left - 2 {
        RevisionType::FinalRevision
    } else if (idx + 1) % 3 == 0 {
        RevisionType::MicroRevision
    } else {
        RevisionType::StudyDay
    }
}
