use super::common::*;
use crate::outage::context::FixedContext;
use crate::outage::domain::{
    CascadeRiskKind, DayType, InvalidInputError, SeverityLevel, SituationalContext, TimeOfDay,
    ZoneInput,
};
use crate::outage::{ZoneAnalyzer, ZoneCatalog};

#[test]
fn metro_short_outage_keeps_hospitals_on_backup() {
    let analysis = analyze_standard("ZONE-001", 2.0, 24.0);

    assert_eq!(analysis.zone_id, "ZONE-001");
    assert_eq!(analysis.hospitals.len(), 3);
    assert!(!analysis
        .recommendations
        .iter()
        .any(|recommendation| recommendation.starts_with("IMMEDIATE")
            || recommendation.starts_with("URGENT")));

    let kinds: Vec<_> = analysis.cascade_risks.iter().map(|risk| risk.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CascadeRiskKind::TrafficSignalFailure,
            CascadeRiskKind::CommunicationDegradation
        ]
    );
    assert!(analysis
        .cascade_risks
        .iter()
        .all(|risk| risk.severity == SeverityLevel::Moderate));
}

#[test]
fn rural_zone_has_no_cascades_or_hospitals() {
    let analysis = analyze_standard("ZONE-004", 10.0, 24.0);

    assert!(analysis.hospitals.is_empty());
    assert!(analysis.cascade_risks.is_empty());
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn unknown_zone_uses_default_baseline() {
    let analysis = analyze_standard("ZONE-999", 4.0, 24.0);

    assert_eq!(analysis.zone_id, "ZONE-999");
    assert!(analysis.hospitals.is_empty());
    assert_eq!(analysis.derived.exposure.population_exposed, 30_000);
    assert_eq!(analysis.derived.exposure.traffic_dependency, 40.0);
    assert!(analysis.cascade_risks.is_empty());
    assert_eq!(analysis.severity_score, 19);
    assert_eq!(analysis.impact_severity, SeverityLevel::Low);
}

#[test]
fn rejects_negative_duration() {
    let input = ZoneInput {
        zone_id: "ZONE-001".to_string(),
        expected_outage_duration: -1.0,
        hospital_backup_hours: 24.0,
    };

    assert_eq!(
        analyzer().analyze(&input),
        Err(InvalidInputError::OutageDuration(-1.0))
    );
}

#[test]
fn rejects_empty_zone_id_with_explicit_context() {
    let input = ZoneInput {
        zone_id: String::new(),
        expected_outage_duration: 4.0,
        hospital_backup_hours: 24.0,
    };

    assert_eq!(
        analyzer().analyze_with_context(&input, weekday_morning().0),
        Err(InvalidInputError::EmptyZoneId)
    );
}

#[test]
fn explicit_context_applies_same_validation() {
    let input = ZoneInput {
        zone_id: "ZONE-002".to_string(),
        expected_outage_duration: 6.0,
        hospital_backup_hours: f64::NAN,
    };

    let sampled = analyzer().analyze(&input);
    let explicit = analyzer().analyze_with_context(&input, weekday_morning().0);
    assert!(matches!(sampled, Err(InvalidInputError::BackupHours(hours)) if hours.is_nan()));
    assert!(matches!(explicit, Err(InvalidInputError::BackupHours(hours)) if hours.is_nan()));
}

#[test]
fn identical_context_yields_identical_analysis() {
    let input = ZoneInput::new("ZONE-003", 7.0, 24.0).expect("valid input");
    let first = analyzer().analyze(&input).expect("analysis succeeds");
    let second = analyzer().analyze(&input).expect("analysis succeeds");

    assert_eq!(first, second);
}

#[test]
fn explicit_context_matches_fixed_source() {
    let context = SituationalContext {
        time_of_day: TimeOfDay::Night,
        day_type: DayType::Weekend,
        weather_risk_index: 12.0,
    };
    let input = ZoneInput::new("ZONE-003", 6.0, 24.0).expect("valid input");

    let pinned = ZoneAnalyzer::new(ZoneCatalog::standard(), FixedContext(context))
        .analyze(&input)
        .expect("analysis succeeds");
    let explicit = analyzer()
        .analyze_with_context(&input, context)
        .expect("analysis succeeds");

    assert_eq!(pinned, explicit);
    assert_eq!(pinned.derived.exposure.time_of_day, TimeOfDay::Night);
    assert_eq!(pinned.derived.exposure.weather_risk_index, 12.0);
}

#[test]
fn night_raises_public_safety_severity() {
    let input = ZoneInput::new("ZONE-003", 6.0, 24.0).expect("valid input");
    let night = ZoneAnalyzer::new(ZoneCatalog::standard(), weekend_night())
        .analyze(&input)
        .expect("analysis succeeds");
    let morning = analyzer().analyze(&input).expect("analysis succeeds");

    let severity_of = |analysis: &crate::outage::ZoneAnalysis| {
        analysis
            .cascade_risks
            .iter()
            .find(|risk| risk.kind == CascadeRiskKind::PublicSafetyConcern)
            .map(|risk| risk.severity)
    };
    assert_eq!(severity_of(&night), Some(SeverityLevel::High));
    assert_eq!(severity_of(&morning), Some(SeverityLevel::Moderate));
}

#[test]
fn analysis_echoes_input_and_lists_zones() {
    let input = ZoneInput::new("ZONE-002", 3.5, 12.0).expect("valid input");
    let analyzer = analyzer();
    let analysis = analyzer.analyze(&input).expect("analysis succeeds");

    assert_eq!(analysis.input, input);
    assert_eq!(analyzer.zone_ids().len(), 4);
    assert_eq!(analyzer.catalog().len(), 4);
}

#[test]
fn scores_stay_in_range_across_durations() {
    let analyzer = analyzer();
    for zone_id in ["ZONE-001", "ZONE-002", "ZONE-003", "ZONE-004", "ZONE-999"] {
        for hours in 1..=72 {
            let input = ZoneInput::new(zone_id, f64::from(hours), 24.0).expect("valid input");
            let analysis = analyzer.analyze(&input).expect("analysis succeeds");

            assert!((0.0..=100.0).contains(&analysis.derived.resilience));
            assert!(analysis.severity_score <= 100);
            assert_eq!(
                analysis.impact_severity,
                SeverityLevel::from_score(analysis.severity_score)
            );
        }
    }
}
