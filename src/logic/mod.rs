pub mod advisor;
pub mod calculations;
pub mod locator;
pub mod policy;
pub mod rules;
pub mod schedule;
pub mod windows;

pub use advisor::WateringAdvisor;
pub use policy::WateringPolicy;
pub use rules::ConditionScorer;
