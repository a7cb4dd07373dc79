//! crates/study_planner_core/src/ports.rs
//!
//! Defines the service contracts (traits) the planner depends on.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! planning logic independent of the model vendor and of the wall clock.

use async_trait::async_trait;
use chrono::NaiveDate;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The model service could not be reached or returned nothing usable.
    #[error("Model service error: {0}")]
    Upstream(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait PlanGenerationService: Send + Sync {
    /// Sends a planning prompt to the model and returns its raw text reply.
    ///
    /// The reply is expected, but not guaranteed, to be JSON.
    async fn generate_plan_content(&self, prompt: &str) -> PortResult<String>;
}

/// Source of "today" for date stamping.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
