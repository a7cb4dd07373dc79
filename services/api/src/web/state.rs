//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use study_planner_core::ports::{Clock, PlanGenerationService};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub plan_adapter: Arc<dyn PlanGenerationService>,
    pub clock: Arc<dyn Clock>,
}
