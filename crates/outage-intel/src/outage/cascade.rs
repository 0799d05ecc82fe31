use super::domain::{CascadeRisk, CascadeRiskKind, DerivedIntelligence, SeverityLevel, TimeOfDay};

fn risk(kind: CascadeRiskKind, severity: SeverityLevel, time_to_impact: f64) -> CascadeRisk {
    CascadeRisk {
        kind,
        severity,
        description: kind.description().to_string(),
        time_to_impact,
    }
}

fn escalate_if(
    condition: bool,
    escalated: SeverityLevel,
    otherwise: SeverityLevel,
) -> SeverityLevel {
    if condition {
        escalated
    } else {
        otherwise
    }
}

/// Secondary failures in generation order: traffic, water, telecom, public safety.
pub fn cascade_risks(derived: &DerivedIntelligence, outage_hours: f64) -> Vec<CascadeRisk> {
    let exposure = &derived.exposure;
    let mut risks = Vec::new();

    if exposure.traffic_dependency > 60.0 {
        risks.push(risk(
            CascadeRiskKind::TrafficSignalFailure,
            escalate_if(outage_hours > 2.0, SeverityLevel::High, SeverityLevel::Moderate),
            0.5,
        ));
    }

    if exposure.water_dependency > 50.0 && outage_hours > 4.0 {
        risks.push(risk(
            CascadeRiskKind::WaterPressureLoss,
            escalate_if(outage_hours > 8.0, SeverityLevel::Critical, SeverityLevel::High),
            4.0,
        ));
    }

    if exposure.telecom_dependency > 70.0 {
        risks.push(risk(
            CascadeRiskKind::CommunicationDegradation,
            escalate_if(outage_hours > 6.0, SeverityLevel::High, SeverityLevel::Moderate),
            6.0,
        ));
    }

    if exposure.population_density > 5000.0 && outage_hours > 4.0 {
        risks.push(risk(
            CascadeRiskKind::PublicSafetyConcern,
            escalate_if(
                exposure.time_of_day == TimeOfDay::Night,
                SeverityLevel::High,
                SeverityLevel::Moderate,
            ),
            0.0,
        ));
    }

    risks
}
