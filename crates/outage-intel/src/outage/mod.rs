//! Outage impact analysis: zone knowledge base, situational context, scoring
//! stages and the orchestrator that composes them.

pub mod cascade;
pub mod catalog;
pub mod context;
pub mod domain;
mod engine;
pub mod recommendations;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogImportError, ZoneCatalog};
pub use context::{ContextSource, FixedContext, SeededContext, SystemContext};
pub use domain::{
    CascadeRisk, CascadeRiskKind, DayType, DerivedIntelligence, ExposureProfile, Hospital,
    HospitalRecord, HospitalStatus, HospitalType, InvalidInputError, RestorationPriority,
    ScoreComponent, SeverityLevel, SituationalContext, TimeOfDay, ZoneAnalysis, ZoneBaseline,
    ZoneInput,
};
pub use engine::{analyze, list_zone_ids, ZoneAnalyzer};
pub use report::AnalysisSummary;
