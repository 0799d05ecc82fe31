use super::domain::{CascadeRiskKind, Hospital, HospitalStatus, ZoneAnalysis};

const NEAR_CRITICAL_MARGIN: f64 = 1.2;
const VENTILATOR_ALERT_THRESHOLD: u64 = 20;

fn hospital_names<'a>(hospitals: impl Iterator<Item = &'a Hospital>) -> String {
    hospitals.map(Hospital::name).collect::<Vec<_>>().join(", ")
}

/// Ordered action list for an analysis whose recommendations are not yet filled in.
///
/// `IMMEDIATE:`, `URGENT:` and `CRITICAL:` prefixes mark priority tiers; other
/// entries are standard actions.
pub fn recommendations(analysis: &ZoneAnalysis) -> Vec<String> {
    let mut actions = Vec::new();
    let outage_hours = analysis.input.expected_outage_duration;

    let mut critical = analysis
        .hospitals
        .iter()
        .filter(|hospital| hospital.current_status == HospitalStatus::Critical)
        .peekable();
    if critical.peek().is_some() {
        actions.push(format!(
            "IMMEDIATE: Deploy mobile generators to {}",
            hospital_names(critical)
        ));
    }

    let mut near_critical = analysis
        .hospitals
        .iter()
        .filter(|hospital| {
            hospital.current_status == HospitalStatus::Backup
                && hospital.backup_hours() < outage_hours * NEAR_CRITICAL_MARGIN
        })
        .peekable();
    if near_critical.peek().is_some() {
        actions.push(format!(
            "URGENT: Pre-position backup power for {}",
            hospital_names(near_critical)
        ));
    }

    let ventilators = analysis.total_ventilator_patients();
    if ventilators > VENTILATOR_ALERT_THRESHOLD {
        actions.push(format!(
            "CRITICAL: {ventilators} ventilator-dependent patients at risk. Coordinate with medical transport."
        ));
    }

    if analysis.has_cascade(CascadeRiskKind::WaterPressureLoss) {
        actions.push(
            "Notify water utility for coordinated response. Consider public advisory.".to_string(),
        );
    }

    if analysis.has_cascade(CascadeRiskKind::CommunicationDegradation) {
        actions.push(
            "Activate emergency communication protocols. Deploy mobile cell units.".to_string(),
        );
    }

    if analysis.severity_score >= 75 {
        actions.push("Allocate maximum restoration crews. Request mutual aid if needed.".to_string());
    } else if analysis.severity_score >= 50 {
        actions.push("Prioritize feeder lines serving critical facilities.".to_string());
    }

    actions
}
