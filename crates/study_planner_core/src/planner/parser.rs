//! crates/study_planner_core/src/planner/parser.rs
//!
//! Turns the model's raw reply into day content, or into an explicit fallback
//! when the reply cannot be used.

use serde_json::Value;
use std::fmt;

use crate::domain::DayContent;

/// Outcome of reading a model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPlan {
    /// The reply had a `plan` array. May be empty.
    Days(Vec<DayContent>),
    /// The reply was unusable and the caller should return an empty plan.
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    InvalidJson(String),
    NotAnObject,
    MissingPlan,
    PlanNotArray,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::InvalidJson(e) => write!(f, "reply is not valid JSON: {}", e),
            FallbackReason::NotAnObject => f.write_str("reply is not a JSON object"),
            FallbackReason::MissingPlan => f.write_str("reply has no \"plan\" key"),
            FallbackReason::PlanNotArray => f.write_str("\"plan\" is not an array"),
        }
    }
}

/// Strictly parses `raw` as `{"plan": [...]}`.
pub fn parse_model_response(raw: &str) -> ParsedPlan {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return ParsedPlan::Fallback(FallbackReason::InvalidJson(e.to_string())),
    };

    let Some(object) = value.as_object() else {
        return ParsedPlan::Fallback(FallbackReason::NotAnObject);
    };

    match object.get("plan") {
        Some(Value::Array(days)) => {
            ParsedPlan::Days(days.iter().map(DayContent::from_value).collect())
        }
        Some(_) => ParsedPlan::Fallback(FallbackReason::PlanNotArray),
        None => ParsedPlan::Fallback(FallbackReason::MissingPlan),
    }
}
