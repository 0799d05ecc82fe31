use super::super::domain::{
    DerivedIntelligence, Hospital, HospitalStatus, RestorationPriority, ScoreComponent,
    SeverityLevel,
};
use super::factors::ScoreLedger;
use tracing::debug;

const POPULATION_FACTOR: &str = "population exposure";
const HOSPITAL_FACTOR: &str = "hospital criticality";
const DEPENDENCY_FACTOR: &str = "dependency cascade";
const DURATION_FACTOR: &str = "outage duration";
const RESILIENCE_FACTOR: &str = "inverse resilience";

/// Severity score with the classification and restoration tier it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityAssessment {
    pub score: u8,
    pub level: SeverityLevel,
    pub priority: RestorationPriority,
    pub components: Vec<ScoreComponent>,
}

fn hospital_criticality(derived: &DerivedIntelligence, hospitals: &[Hospital]) -> f64 {
    if hospitals.is_empty() {
        return 0.0;
    }

    let count = |status: HospitalStatus| {
        hospitals
            .iter()
            .filter(|hospital| hospital.current_status == status)
            .count() as f64
    };
    let ventilators: u64 = hospitals
        .iter()
        .map(|hospital| u64::from(hospital.record.ventilator_patients))
        .sum();
    let icu: u64 = hospitals
        .iter()
        .map(|hospital| u64::from(hospital.record.icu_patients))
        .sum();

    count(HospitalStatus::Critical) * 10.0
        + count(HospitalStatus::Backup) * 3.0
        + (ventilators as f64 * 0.5).min(15.0)
        + (icu as f64 * 0.15).min(10.0)
        + derived.exposure.hospital_type_score * 1.5
}

/// Additive 0-100 impact score across population, hospitals, dependencies,
/// duration and inverse resilience.
pub fn score_severity(
    derived: &DerivedIntelligence,
    hospitals: &[Hospital],
    outage_hours: f64,
) -> SeverityAssessment {
    let exposure = &derived.exposure;
    let mut ledger = ScoreLedger::new(0.0);

    ledger
        .add_capped(
            POPULATION_FACTOR,
            exposure.population_exposed as f64 / 10_000.0 * 1.5,
            25.0,
        )
        .add(HOSPITAL_FACTOR, hospital_criticality(derived, hospitals))
        .add(DEPENDENCY_FACTOR, exposure.dependency_total() / 15.0)
        .add_capped(DURATION_FACTOR, outage_hours * 1.5, 15.0)
        .add(RESILIENCE_FACTOR, (100.0 - derived.resilience) * 0.05);

    let score = ledger.raw_total().round().clamp(0.0, 100.0) as u8;
    let level = SeverityLevel::from_score(score);
    let priority = RestorationPriority::from_severity(level);
    debug!(score, ?level, "severity scored");

    SeverityAssessment {
        score,
        level,
        priority,
        components: ledger.into_components(),
    }
}
