mod summary;
pub mod views;

pub use summary::AnalysisSummary;
pub use views::{HospitalLoad, RecommendationTier, TierCounts};
