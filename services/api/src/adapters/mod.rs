pub mod clock;
pub mod plan_llm;

pub use clock::SystemClock;
pub use plan_llm::OpenAiPlanAdapter;
