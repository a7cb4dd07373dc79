//! crates/study_planner_core/src/breaks.rs
//!
//! Break routine suggested for a given amount of daily study.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakStrategy {
    /// Up to three hours a day.
    Light,
    /// More than three and up to six hours a day.
    Pomodoro,
    /// More than six hours a day.
    DeepFocus,
}

impl BreakStrategy {
    pub fn for_hours(hours: f64) -> Self {
        if hours <= 3.0 {
            BreakStrategy::Light
        } else if hours <= 6.0 {
            BreakStrategy::Pomodoro
        } else {
            BreakStrategy::DeepFocus
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BreakStrategy::Light => "Light breaks • 5–10 min every hour",
            BreakStrategy::Pomodoro => "Pomodoro • 25 min study + 5 min break",
            BreakStrategy::DeepFocus => "Deep focus • 50 min study + 10 min break",
        }
    }
}
