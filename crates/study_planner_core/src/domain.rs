//! crates/study_planner_core/src/domain.rs
//!
//! Defines the core data structures for the planner: the untrusted day content
//! returned by the model, the normalized day records handed back to callers,
//! and the plan request itself.

use chrono::NaiveDate;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::ports::{PortError, PortResult};

/// Focus label used when the model did not supply one.
pub const DEFAULT_FOCUS: &str = "Revision / Practice";

//=========================================================================================
// Producer-side types (untrusted)
//=========================================================================================

/// Minutes budgeted for each kind of work on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeAllocation {
    #[serde(deserialize_with = "whole_minutes")]
    pub concepts_minutes: u32,
    #[serde(deserialize_with = "whole_minutes")]
    pub practice_minutes: u32,
    #[serde(deserialize_with = "whole_minutes")]
    pub revision_minutes: u32,
}

/// Accepts `45` and `45.0`, rejects `45.5`, negatives and values past `u32::MAX`.
fn whole_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = f64::deserialize(deserializer)?;
    if minutes.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&minutes) {
        return Err(de::Error::custom(format!(
            "{} is not a whole number of minutes",
            minutes
        )));
    }
    Ok(minutes as u32)
}

impl TimeAllocation {
    /// The split used when the model gave no allocation for a day.
    ///
    /// Integer halves, thirds and sixths of the daily budget. The three parts
    /// only add back up to `total_minutes` when it is a multiple of six.
    pub fn fallback(total_minutes: u32) -> Self {
        Self {
            concepts_minutes: total_minutes / 2,
            practice_minutes: total_minutes / 3,
            revision_minutes: total_minutes / 6,
        }
    }
}

/// Content for one study day as the model produced it. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayContent {
    pub focus: Option<String>,
    pub objective: Option<String>,
    pub concepts: Option<Vec<String>>,
    pub activities: Option<Vec<String>>,
    pub time_allocation: Option<TimeAllocation>,
    pub outcome_check: Option<String>,
}

impl DayContent {
    /// Reads day content out of an arbitrary JSON value.
    ///
    /// A field with the wrong JSON type counts as missing, and a value that is
    /// not an object yields content with every field missing. Minute values may
    /// be integers or whole-number floats; a `time_allocation` with any key
    /// missing or fractional counts as missing as a whole. Keys the planner
    /// does not know about (including any date or day number) are ignored.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            focus: field(object, "focus"),
            objective: field(object, "objective"),
            concepts: field(object, "concepts"),
            activities: field(object, "activities"),
            time_allocation: field(object, "time_allocation"),
            outcome_check: field(object, "outcome_check"),
        }
    }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

//=========================================================================================
// Normalized output types (trusted)
//=========================================================================================

/// Positional tag attached to every day of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevisionType {
    #[default]
    #[serde(rename = "Study Day")]
    StudyDay,
    #[serde(rename = "Micro Revision")]
    MicroRevision,
    #[serde(rename = "Final Revision")]
    FinalRevision,
}

impl RevisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionType::StudyDay => "Study Day",
            RevisionType::MicroRevision => "Micro Revision",
            RevisionType::FinalRevision => "Final Revision",
        }
    }
}

impl fmt::Display for RevisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully populated, date-stamped day of a study plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    /// Display label, e.g. `Day 3 (2026-10-21)`.
    pub day: String,
    pub focus: String,
    pub objective: String,
    pub concepts: Vec<String>,
    pub activities: Vec<String>,
    pub time_allocation: TimeAllocation,
    pub outcome_check: String,
    pub revision_type: RevisionType,
}

/// The ordered list of day records returned for one request.
///
/// Serializes as `{"plan": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(rename = "plan")]
    pub days: Vec<DayRecord>,
}

impl StudyPlan {
    pub fn new(days: Vec<DayRecord>) -> Self {
        Self { days }
    }

    /// The plan returned when there is nothing to schedule or the model
    /// output could not be used.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

//=========================================================================================
// Inbound request
//=========================================================================================

/// Everything needed to generate one plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub subject: String,
    pub exam_date: NaiveDate,
    /// Daily study hours.
    pub hours: f64,
    /// Free text such as "Exam Revision". Only ever forwarded to the prompt.
    pub study_mode: String,
}

impl PlanRequest {
    /// Checks the values a plan cannot be built without.
    pub fn validate(&self) -> PortResult<()> {
        if self.subject.trim().is_empty() {
            return Err(PortError::InvalidInput(
                "subject must not be empty".to_string(),
            ));
        }
        if !self.hours.is_finite() || self.hours <= 0.0 {
            return Err(PortError::InvalidInput(format!(
                "hours must be a positive number, got {}",
                self.hours
            )));
        }
        Ok(())
    }

    /// Daily budget in whole minutes.
    pub fn total_minutes(&self) -> u32 {
        // `as` saturates, so absurd hour counts clamp instead of wrapping.
        (self.hours * 60.0).floor() as u32
    }
}
