use super::super::domain::{Hospital, HospitalStatus};
use serde::Serialize;

/// Hospitals with less backup than this are flagged as limited.
pub const LIMITED_BACKUP_HOURS: f64 = 24.0;

/// Display tier encoded by a recommendation's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTier {
    Immediate,
    Urgent,
    Standard,
}

const TIER_PREFIXES: [(&str, RecommendationTier); 3] = [
    ("IMMEDIATE:", RecommendationTier::Immediate),
    ("CRITICAL:", RecommendationTier::Immediate),
    ("URGENT:", RecommendationTier::Urgent),
];

impl RecommendationTier {
    pub fn classify(recommendation: &str) -> Self {
        TIER_PREFIXES
            .iter()
            .find(|(prefix, _)| recommendation.starts_with(prefix))
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::Standard)
    }

    /// Recommendation text without its `PREFIX:` marker.
    pub fn display_text(recommendation: &str) -> &str {
        TIER_PREFIXES
            .iter()
            .find_map(|(prefix, _)| recommendation.strip_prefix(prefix))
            .map(str::trim_start)
            .unwrap_or(recommendation)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Urgent => "urgent",
            Self::Standard => "standard",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub immediate: usize,
    pub urgent: usize,
    pub standard: usize,
}

impl TierCounts {
    pub fn tally<'a>(recommendations: impl IntoIterator<Item = &'a String>) -> Self {
        let mut counts = Self::default();
        for recommendation in recommendations {
            match RecommendationTier::classify(recommendation) {
                RecommendationTier::Immediate => counts.immediate += 1,
                RecommendationTier::Urgent => counts.urgent += 1,
                RecommendationTier::Standard => counts.standard += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.immediate + self.urgent + self.standard
    }
}

/// Patient load across a zone's hospitals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HospitalLoad {
    pub total_patients: u64,
    pub icu_patients: u64,
    pub ventilator_patients: u64,
    pub critical: usize,
    pub on_backup: usize,
    pub limited_backup: Vec<String>,
}

impl HospitalLoad {
    pub fn from_hospitals(hospitals: &[Hospital]) -> Self {
        hospitals
            .iter()
            .fold(Self::default(), |mut load, hospital| {
                let record = &hospital.record;
                load.total_patients += u64::from(record.patient_count);
                load.icu_patients += u64::from(record.icu_patients);
                load.ventilator_patients += u64::from(record.ventilator_patients);
                match hospital.current_status {
                    HospitalStatus::Critical => load.critical += 1,
                    HospitalStatus::Backup => load.on_backup += 1,
                    HospitalStatus::Operational => {}
                }
                if record.backup_hours < LIMITED_BACKUP_HOURS {
                    load.limited_backup.push(record.name.clone());
                }
                load
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(
            RecommendationTier::classify("IMMEDIATE: Deploy mobile generators to A"),
            RecommendationTier::Immediate
        );
        assert_eq!(
            RecommendationTier::classify("CRITICAL: 42 ventilator-dependent patients at risk."),
            RecommendationTier::Immediate
        );
        assert_eq!(
            RecommendationTier::classify("URGENT: Pre-position backup power for B"),
            RecommendationTier::Urgent
        );
        assert_eq!(
            RecommendationTier::classify("Prioritize feeder lines serving critical facilities."),
            RecommendationTier::Standard
        );
    }

    #[test]
    fn display_text_strips_prefix_and_spacing() {
        assert_eq!(
            RecommendationTier::display_text("URGENT:   Pre-position backup power for B"),
            "Pre-position backup power for B"
        );
        assert_eq!(
            RecommendationTier::display_text("Notify water utility for coordinated response."),
            "Notify water utility for coordinated response."
        );
    }

    #[test]
    fn prefix_requires_marker_colon() {
        let text = "CRITICALLY low fuel reserves at depot";
        assert_eq!(
            RecommendationTier::classify(text),
            RecommendationTier::Standard
        );
        assert_eq!(RecommendationTier::display_text(text), text);
    }

    #[test]
    fn tallies_tiers() {
        let recommendations = vec![
            "IMMEDIATE: a".to_string(),
            "CRITICAL: b".to_string(),
            "URGENT: c".to_string(),
            "d".to_string(),
        ];
        let counts = TierCounts::tally(&recommendations);
        assert_eq!(
            counts,
            TierCounts {
                immediate: 2,
                urgent: 1,
                standard: 1
            }
        );
        assert_eq!(counts.total(), 4);
    }
}
