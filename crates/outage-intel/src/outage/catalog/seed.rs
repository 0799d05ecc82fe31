use super::super::domain::{HospitalRecord, HospitalType, ZoneBaseline};

fn hospital(
    id: &str,
    name: &str,
    kind: HospitalType,
    backup_hours: f64,
    patient_count: u32,
    icu_patients: u32,
    ventilator_patients: u32,
) -> HospitalRecord {
    HospitalRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        backup_hours,
        patient_count,
        icu_patients,
        ventilator_patients,
    }
}

pub(super) fn reference_zones() -> Vec<(String, ZoneBaseline)> {
    vec![
        (
            "ZONE-001".to_string(),
            ZoneBaseline {
                population_density: 8500.0,
                population_exposed: 125_000,
                hospital_count: 3,
                hospital_type_score: 8.5,
                traffic_dependency: 75.0,
                water_dependency: 60.0,
                telecom_dependency: 85.0,
                hospitals: vec![
                    hospital(
                        "H001",
                        "Metro General Hospital",
                        HospitalType::LevelOneTrauma,
                        48.0,
                        450,
                        45,
                        22,
                    ),
                    hospital(
                        "H002",
                        "St. Mary's Medical Center",
                        HospitalType::General,
                        24.0,
                        280,
                        18,
                        8,
                    ),
                    hospital(
                        "H003",
                        "Children's Regional",
                        HospitalType::Children,
                        36.0,
                        180,
                        25,
                        12,
                    ),
                ],
            },
        ),
        (
            "ZONE-002".to_string(),
            ZoneBaseline {
                population_density: 3200.0,
                population_exposed: 45_000,
                hospital_count: 1,
                hospital_type_score: 5.0,
                traffic_dependency: 45.0,
                water_dependency: 70.0,
                telecom_dependency: 55.0,
                hospitals: vec![hospital(
                    "H004",
                    "Suburban Community Hospital",
                    HospitalType::General,
                    18.0,
                    120,
                    8,
                    3,
                )],
            },
        ),
        (
            "ZONE-003".to_string(),
            ZoneBaseline {
                population_density: 12_000.0,
                population_exposed: 210_000,
                hospital_count: 5,
                hospital_type_score: 9.2,
                traffic_dependency: 90.0,
                water_dependency: 80.0,
                telecom_dependency: 95.0,
                hospitals: vec![
                    hospital(
                        "H005",
                        "University Medical Center",
                        HospitalType::LevelOneTrauma,
                        72.0,
                        650,
                        80,
                        45,
                    ),
                    hospital(
                        "H006",
                        "Downtown Emergency",
                        HospitalType::LevelTwoTrauma,
                        36.0,
                        320,
                        35,
                        18,
                    ),
                    hospital(
                        "H007",
                        "Heart & Vascular Institute",
                        HospitalType::Specialty,
                        48.0,
                        180,
                        40,
                        15,
                    ),
                    hospital(
                        "H008",
                        "Pediatric Care Center",
                        HospitalType::Children,
                        42.0,
                        140,
                        20,
                        10,
                    ),
                    hospital(
                        "H009",
                        "Memorial Hospital",
                        HospitalType::General,
                        24.0,
                        380,
                        22,
                        9,
                    ),
                ],
            },
        ),
        (
            "ZONE-004".to_string(),
            ZoneBaseline {
                population_density: 1500.0,
                population_exposed: 22_000,
                hospital_count: 0,
                hospital_type_score: 0.0,
                traffic_dependency: 25.0,
                water_dependency: 40.0,
                telecom_dependency: 30.0,
                hospitals: Vec::new(),
            },
        ),
    ]
}
