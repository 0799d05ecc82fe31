use std::sync::Arc;

use crate::outage::catalog::ZoneCatalog;
use crate::outage::context::FixedContext;
use crate::outage::domain::{
    DayType, DerivedIntelligence, ExposureProfile, HospitalRecord, HospitalType, TimeOfDay,
    ZoneAnalysis, ZoneBaseline, ZoneInput,
};
use crate::outage::engine::ZoneAnalyzer;

pub(super) const WEATHER: f64 = 30.0;

pub(super) fn weekday_morning() -> FixedContext {
    FixedContext::new(TimeOfDay::Morning, DayType::Weekday, WEATHER)
}

pub(super) fn weekend_night() -> FixedContext {
    FixedContext::new(TimeOfDay::Night, DayType::Weekend, WEATHER)
}

pub(super) fn analyzer() -> ZoneAnalyzer<FixedContext> {
    ZoneAnalyzer::new(ZoneCatalog::standard(), weekday_morning())
}

pub(super) fn analyze_standard(zone_id: &str, outage_hours: f64, backup_hours: f64) -> ZoneAnalysis {
    let input = ZoneInput::new(zone_id, outage_hours, backup_hours).expect("valid input");
    analyzer().analyze(&input).expect("analysis succeeds")
}

pub(super) fn hospital(id: &str, name: &str, backup_hours: f64, ventilators: u32) -> HospitalRecord {
    HospitalRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind: HospitalType::General,
        backup_hours,
        patient_count: 100,
        icu_patients: 10,
        ventilator_patients: ventilators,
    }
}

pub(super) fn quiet_baseline() -> ZoneBaseline {
    ZoneBaseline {
        population_density: 1000.0,
        population_exposed: 10_000,
        hospital_count: 0,
        hospital_type_score: 0.0,
        traffic_dependency: 10.0,
        water_dependency: 10.0,
        telecom_dependency: 10.0,
        hospitals: Vec::new(),
    }
}

pub(super) fn with_hospitals(mut baseline: ZoneBaseline, hospitals: Vec<HospitalRecord>) -> ZoneBaseline {
    baseline.hospital_count = hospitals.len() as u32;
    baseline.hospitals = hospitals;
    baseline
}

pub(super) fn custom_analyzer(zone_id: &str, baseline: ZoneBaseline) -> ZoneAnalyzer<FixedContext> {
    let catalog = ZoneCatalog::from_entries([(zone_id.to_string(), baseline)]);
    ZoneAnalyzer::new(Arc::new(catalog), weekday_morning())
}

pub(super) fn analyze_custom(baseline: ZoneBaseline, outage_hours: f64) -> ZoneAnalysis {
    let input = ZoneInput::new("TEST-ZONE", outage_hours, 24.0).expect("valid input");
    custom_analyzer("TEST-ZONE", baseline)
        .analyze(&input)
        .expect("analysis succeeds")
}

pub(super) fn derived(
    traffic: f64,
    water: f64,
    telecom: f64,
    density: f64,
    time_of_day: TimeOfDay,
) -> DerivedIntelligence {
    DerivedIntelligence {
        exposure: ExposureProfile {
            population_density: density,
            population_exposed: 20_000,
            hospital_count: 0,
            hospital_type_score: 0.0,
            traffic_dependency: traffic,
            water_dependency: water,
            telecom_dependency: telecom,
            time_of_day,
            day_type: DayType::Weekday,
            weather_risk_index: WEATHER,
        },
        resilience: 70.0,
    }
}

pub(super) fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}
