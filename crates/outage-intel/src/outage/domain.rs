use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator request for a single zone analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInput {
    pub zone_id: String,
    /// Expected outage duration in hours.
    pub expected_outage_duration: f64,
    /// Backup capacity assumed for hospitals when the zone lists none.
    pub hospital_backup_hours: f64,
}

impl ZoneInput {
    /// Build a request, rejecting values the engine cannot score.
    pub fn new(
        zone_id: impl Into<String>,
        expected_outage_duration: f64,
        hospital_backup_hours: f64,
    ) -> Result<Self, InvalidInputError> {
        let input = Self {
            zone_id: zone_id.into(),
            expected_outage_duration,
            hospital_backup_hours,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.zone_id.trim().is_empty() {
            return Err(InvalidInputError::EmptyZoneId);
        }
        if !is_positive_hours(self.expected_outage_duration) {
            return Err(InvalidInputError::OutageDuration(
                self.expected_outage_duration,
            ));
        }
        if !is_positive_hours(self.hospital_backup_hours) {
            return Err(InvalidInputError::BackupHours(self.hospital_backup_hours));
        }
        Ok(())
    }
}

fn is_positive_hours(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Rejected analysis request. No partial analysis accompanies it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("zone id must not be empty")]
    EmptyZoneId,
    #[error("expected outage duration must be a positive number of hours, got {0}")]
    OutageDuration(f64),
    #[error("hospital backup hours must be a positive number of hours, got {0}")]
    BackupHours(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HospitalType {
    #[serde(rename = "Level I Trauma")]
    LevelOneTrauma,
    #[serde(rename = "Level II Trauma")]
    LevelTwoTrauma,
    General,
    Specialty,
    Children,
}

impl HospitalType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LevelOneTrauma => "Level I Trauma",
            Self::LevelTwoTrauma => "Level II Trauma",
            Self::General => "General",
            Self::Specialty => "Specialty",
            Self::Children => "Children",
        }
    }
}

impl fmt::Display for HospitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static reference data for a hospital inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HospitalType,
    pub backup_hours: f64,
    pub patient_count: u32,
    pub icu_patients: u32,
    pub ventilator_patients: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalStatus {
    Operational,
    Backup,
    Critical,
}

impl HospitalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Backup => "backup",
            Self::Critical => "critical",
        }
    }
}

/// Hospital with its status resolved for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(flatten)]
    pub record: HospitalRecord,
    pub current_status: HospitalStatus,
}

impl Hospital {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn backup_hours(&self) -> f64 {
        self.record.backup_hours
    }
}

/// Demographic and dependency baseline for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBaseline {
    /// People per square kilometre.
    pub population_density: f64,
    pub population_exposed: u64,
    pub hospital_count: u32,
    /// 0-10 weighting of the zone's hospital mix.
    pub hospital_type_score: f64,
    pub traffic_dependency: f64,
    pub water_dependency: f64,
    pub telecom_dependency: f64,
    pub hospitals: Vec<HospitalRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a 24-hour clock hour.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn from_weekday(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat | chrono::Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
        }
    }
}

/// Time-varying conditions sampled once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SituationalContext {
    pub time_of_day: TimeOfDay,
    pub day_type: DayType,
    pub weather_risk_index: f64,
}

/// Zone baseline fields plus context, before resilience is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureProfile {
    pub population_density: f64,
    pub population_exposed: u64,
    pub hospital_count: u32,
    pub hospital_type_score: f64,
    pub traffic_dependency: f64,
    pub water_dependency: f64,
    pub telecom_dependency: f64,
    pub time_of_day: TimeOfDay,
    pub day_type: DayType,
    pub weather_risk_index: f64,
}

impl ExposureProfile {
    pub fn new(baseline: &ZoneBaseline, context: SituationalContext) -> Self {
        Self {
            population_density: baseline.population_density,
            population_exposed: baseline.population_exposed,
            hospital_count: baseline.hospital_count,
            hospital_type_score: baseline.hospital_type_score,
            traffic_dependency: baseline.traffic_dependency,
            water_dependency: baseline.water_dependency,
            telecom_dependency: baseline.telecom_dependency,
            time_of_day: context.time_of_day,
            day_type: context.day_type,
            weather_risk_index: context.weather_risk_index,
        }
    }

    pub fn dependency_total(&self) -> f64 {
        self.traffic_dependency + self.water_dependency + self.telecom_dependency
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedIntelligence {
    #[serde(flatten)]
    pub exposure: ExposureProfile,
    /// 0-100, higher means the zone absorbs the outage better.
    pub resilience: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => Self::Critical,
            50..=74 => Self::High,
            25..=49 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Restoration ordering, 1 is restored first. Only derivable from a severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RestorationPriority(u8);

impl RestorationPriority {
    pub const fn from_severity(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Critical => Self(1),
            SeverityLevel::High => Self(2),
            SeverityLevel::Moderate => Self(3),
            SeverityLevel::Low => Self(4),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn guidance(self) -> &'static str {
        match self.0 {
            1 => "Highest restoration priority - immediate action required",
            2 => "High priority - expedite restoration crews",
            3 => "Standard priority - schedule restoration",
            _ => "Lower priority - routine scheduling",
        }
    }
}

impl fmt::Display for RestorationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CascadeRiskKind {
    #[serde(rename = "Traffic Signal Failure")]
    TrafficSignalFailure,
    #[serde(rename = "Water Pressure Loss")]
    WaterPressureLoss,
    #[serde(rename = "Communication Degradation")]
    CommunicationDegradation,
    #[serde(rename = "Public Safety Concern")]
    PublicSafetyConcern,
}

impl CascadeRiskKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TrafficSignalFailure => "Traffic Signal Failure",
            Self::WaterPressureLoss => "Water Pressure Loss",
            Self::CommunicationDegradation => "Communication Degradation",
            Self::PublicSafetyConcern => "Public Safety Concern",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::TrafficSignalFailure => {
                "Traffic management systems offline. Emergency vehicle routing compromised."
            }
            Self::WaterPressureLoss => {
                "Electric pumping stations affected. Potential boil-water advisory."
            }
            Self::CommunicationDegradation => "Cell tower backup depleting. 911 service at risk.",
            Self::PublicSafetyConcern => {
                "Street lighting offline. Increased accident and security risks."
            }
        }
    }
}

/// Secondary failure plausibly triggered by the outage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeRisk {
    #[serde(rename = "type")]
    pub kind: CascadeRiskKind,
    pub severity: SeverityLevel,
    pub description: String,
    /// Hours from outage start until the effect is felt.
    pub time_to_impact: f64,
}

/// One weighted contribution to a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: String,
    pub points: f64,
}

/// Complete, immutable result of one zone analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneAnalysis {
    pub zone_id: String,
    pub input: ZoneInput,
    pub derived: DerivedIntelligence,
    pub hospitals: Vec<Hospital>,
    pub impact_severity: SeverityLevel,
    pub severity_score: u8,
    pub restoration_priority: RestorationPriority,
    pub severity_components: Vec<ScoreComponent>,
    pub cascade_risks: Vec<CascadeRisk>,
    pub recommendations: Vec<String>,
}

impl ZoneAnalysis {
    /// Summed in `u64` so no roster of `u32` counts can overflow.
    pub fn total_ventilator_patients(&self) -> u64 {
        self.hospitals
            .iter()
            .map(|hospital| u64::from(hospital.record.ventilator_patients))
            .sum()
    }

    pub fn has_cascade(&self, kind: CascadeRiskKind) -> bool {
        self.cascade_risks.iter().any(|risk| risk.kind == kind)
    }
}
