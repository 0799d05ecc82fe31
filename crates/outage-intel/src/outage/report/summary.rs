use super::super::domain::{RestorationPriority, SeverityLevel, ZoneAnalysis};
use super::views::{HospitalLoad, TierCounts};
use serde::Serialize;

/// Operator-facing digest of a zone analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub zone_id: String,
    pub severity_score: u8,
    pub impact_severity: SeverityLevel,
    pub restoration_priority: RestorationPriority,
    pub priority_guidance: &'static str,
    pub outage_hours: f64,
    pub population_exposed: u64,
    pub resilience: u8,
    pub hospital_load: HospitalLoad,
    pub cascade_risk_count: usize,
    pub recommendation_tiers: TierCounts,
}

impl AnalysisSummary {
    pub fn from_analysis(analysis: &ZoneAnalysis) -> Self {
        Self {
            zone_id: analysis.zone_id.clone(),
            severity_score: analysis.severity_score,
            impact_severity: analysis.impact_severity,
            restoration_priority: analysis.restoration_priority,
            priority_guidance: analysis.restoration_priority.guidance(),
            outage_hours: analysis.input.expected_outage_duration,
            population_exposed: analysis.derived.exposure.population_exposed,
            resilience: analysis.derived.resilience.round().clamp(0.0, 100.0) as u8,
            hospital_load: HospitalLoad::from_hospitals(&analysis.hospitals),
            cascade_risk_count: analysis.cascade_risks.len(),
            recommendation_tiers: TierCounts::tally(&analysis.recommendations),
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "{}: severity {} ({}), restoration {}",
            self.zone_id, self.severity_score, self.impact_severity, self.restoration_priority
        )
    }
}

impl ZoneAnalysis {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::from_analysis(self)
    }
}
