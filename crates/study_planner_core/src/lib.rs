pub mod breaks;
pub mod domain;
pub mod export;
pub mod planner;
pub mod ports;

pub use breaks::BreakStrategy;
pub use domain::{DayContent, DayRecord, PlanRequest, RevisionType, StudyPlan, TimeAllocation};
pub use planner::generate_study_plan;
pub use ports::{Clock, PlanGenerationService, PortError, PortResult};
