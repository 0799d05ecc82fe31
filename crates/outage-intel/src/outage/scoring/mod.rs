mod factors;
mod hospitals;
mod resilience;
mod severity;

pub use hospitals::{resolve_hospitals, resolve_status};
pub use resilience::estimate_resilience;
pub use severity::{score_severity, SeverityAssessment};

