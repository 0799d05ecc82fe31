use super::super::domain::{Hospital, HospitalRecord, HospitalStatus};

/// Operational status of a hospital after `outage_hours` without grid power.
///
/// Any outage shorter than the backup capacity reads as `Backup`; there is no
/// early/late split within the backup window.
pub fn resolve_status(hospital: &HospitalRecord, outage_hours: f64) -> HospitalStatus {
    if outage_hours == 0.0 {
        HospitalStatus::Operational
    } else if outage_hours < hospital.backup_hours {
        HospitalStatus::Backup
    } else {
        HospitalStatus::Critical
    }
}

pub fn resolve_hospitals(records: &[HospitalRecord], outage_hours: f64) -> Vec<Hospital> {
    records
        .iter()
        .map(|record| Hospital {
            record: record.clone(),
            current_status: resolve_status(record, outage_hours),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outage::domain::HospitalType;

    fn record(backup_hours: f64) -> HospitalRecord {
        HospitalRecord {
            id: "H900".to_string(),
            name: "County General".to_string(),
            kind: HospitalType::General,
            backup_hours,
            patient_count: 100,
            icu_patients: 10,
            ventilator_patients: 4,
        }
    }

    #[test]
    fn zero_outage_is_operational() {
        assert_eq!(resolve_status(&record(24.0), 0.0), HospitalStatus::Operational);
    }

    #[test]
    fn early_and_late_backup_window_share_one_status() {
        let hospital = record(24.0);
        assert_eq!(resolve_status(&hospital, 2.0), HospitalStatus::Backup);
        assert_eq!(resolve_status(&hospital, 12.0), HospitalStatus::Backup);
        assert_eq!(resolve_status(&hospital, 23.9), HospitalStatus::Backup);
    }

    #[test]
    fn outage_equal_to_backup_is_critical() {
        let hospital = record(24.0);
        assert_eq!(resolve_status(&hospital, 24.0), HospitalStatus::Critical);
        assert_eq!(resolve_status(&hospital, 30.0), HospitalStatus::Critical);
    }

    #[test]
    fn resolves_each_hospital_in_roster_order() {
        let roster = vec![record(10.0), record(48.0)];
        let hospitals = resolve_hospitals(&roster, 12.0);

        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].current_status, HospitalStatus::Critical);
        assert_eq!(hospitals[1].current_status, HospitalStatus::Backup);
        assert_eq!(hospitals[1].record, roster[1]);
    }
}
