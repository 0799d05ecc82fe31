use super::super::domain::{HospitalRecord, HospitalType, ZoneBaseline};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Failure while loading a zone catalog export. Nothing is loaded on error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("zones export row {0} has a blank zone_id")]
    BlankZoneId(usize),
    #[error("zone '{0}' appears more than once in the zones export")]
    DuplicateZone(String),
    #[error("hospital '{hospital_id}' references unknown zone '{zone_id}'")]
    UnknownZone {
        zone_id: String,
        hospital_id: String,
    },
    #[error("{field} for '{record}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        record: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("backup hours for hospital '{0}' must be positive")]
    BackupHours(String),
}

#[derive(Debug, Deserialize)]
struct ZoneRow {
    zone_id: String,
    population_density: f64,
    population_exposed: u64,
    hospital_type_score: f64,
    traffic_dependency: f64,
    water_dependency: f64,
    telecom_dependency: f64,
}

#[derive(Debug, Deserialize)]
struct HospitalRow {
    zone_id: String,
    hospital_id: String,
    name: String,
    #[serde(rename = "type")]
    kind: HospitalType,
    backup_hours: f64,
    patient_count: u32,
    icu_patients: u32,
    ventilator_patients: u32,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn within(
    record: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CatalogImportError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CatalogImportError::OutOfRange {
            record: record.to_string(),
            field,
            value,
            min,
            max,
        })
    }
}

impl ZoneRow {
    fn into_baseline(self, row: usize) -> Result<(String, ZoneBaseline), CatalogImportError> {
        if self.zone_id.is_empty() {
            return Err(CatalogImportError::BlankZoneId(row));
        }
        let id = self.zone_id.as_str();
        within(id, "population_density", self.population_density, 0.0, f64::MAX)?;
        within(id, "hospital_type_score", self.hospital_type_score, 0.0, 10.0)?;
        within(id, "traffic_dependency", self.traffic_dependency, 0.0, 100.0)?;
        within(id, "water_dependency", self.water_dependency, 0.0, 100.0)?;
        within(id, "telecom_dependency", self.telecom_dependency, 0.0, 100.0)?;

        let baseline = ZoneBaseline {
            population_density: self.population_density,
            population_exposed: self.population_exposed,
            hospital_count: 0,
            hospital_type_score: self.hospital_type_score,
            traffic_dependency: self.traffic_dependency,
            water_dependency: self.water_dependency,
            telecom_dependency: self.telecom_dependency,
            hospitals: Vec::new(),
        };
        Ok((self.zone_id, baseline))
    }
}

impl HospitalRow {
    fn into_record(self) -> Result<(String, HospitalRecord), CatalogImportError> {
        if !(self.backup_hours.is_finite() && self.backup_hours > 0.0) {
            return Err(CatalogImportError::BackupHours(self.hospital_id));
        }

        let record = HospitalRecord {
            id: self.hospital_id,
            name: self.name,
            kind: self.kind,
            backup_hours: self.backup_hours,
            patient_count: self.patient_count,
            icu_patients: self.icu_patients,
            ventilator_patients: self.ventilator_patients,
        };
        Ok((self.zone_id, record))
    }
}

pub(super) fn read_catalog<Z: Read, H: Read>(
    zones: Z,
    hospitals: H,
) -> Result<Vec<(String, ZoneBaseline)>, CatalogImportError> {
    let mut entries: Vec<(String, ZoneBaseline)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (index, row) in reader(zones).deserialize::<ZoneRow>().enumerate() {
        let (zone_id, baseline) = row?.into_baseline(index + 1)?;
        if slots.contains_key(&zone_id) {
            return Err(CatalogImportError::DuplicateZone(zone_id));
        }
        slots.insert(zone_id.clone(), entries.len());
        entries.push((zone_id, baseline));
    }

    for row in reader(hospitals).deserialize::<HospitalRow>() {
        let (zone_id, record) = row?.into_record()?;
        let Some(&slot) = slots.get(&zone_id) else {
            return Err(CatalogImportError::UnknownZone {
                zone_id,
                hospital_id: record.id,
            });
        };
        entries[slot].1.hospitals.push(record);
    }

    for (_, baseline) in &mut entries {
        baseline.hospital_count = baseline.hospitals.len() as u32;
    }

    Ok(entries)
}
