use super::super::domain::{DayType, ExposureProfile, Hospital, TimeOfDay};
use super::factors::ScoreLedger;
use tracing::debug;

const BACKUP_SHORTFALL_PER_HOUR: f64 = 5.0;
const BACKUP_SHORTFALL_CAP: f64 = 40.0;
const TRAFFIC_WEIGHT: f64 = 0.15;
const WATER_WEIGHT: f64 = 0.15;
const TELECOM_WEIGHT: f64 = 0.10;
const LOW_DEMAND_BONUS: f64 = 5.0;
const WEATHER_WEIGHT: f64 = 0.10;

/// Resilience on a 0-100 scale; higher means the zone absorbs the outage better.
///
/// `requested_backup_hours` stands in for hospital backup when the zone lists
/// no hospitals.
pub fn estimate_resilience(
    exposure: &ExposureProfile,
    hospitals: &[Hospital],
    outage_hours: f64,
    requested_backup_hours: f64,
) -> f64 {
    let average_backup = if hospitals.is_empty() {
        requested_backup_hours
    } else {
        hospitals.iter().map(Hospital::backup_hours).sum::<f64>() / hospitals.len() as f64
    };

    let mut ledger = ScoreLedger::new(100.0);

    if outage_hours > average_backup {
        ledger.subtract_capped(
            "backup shortfall",
            (outage_hours - average_backup) * BACKUP_SHORTFALL_PER_HOUR,
            BACKUP_SHORTFALL_CAP,
        );
    }

    ledger
        .subtract("traffic dependency", exposure.traffic_dependency * TRAFFIC_WEIGHT)
        .subtract("water dependency", exposure.water_dependency * WATER_WEIGHT)
        .subtract("telecom dependency", exposure.telecom_dependency * TELECOM_WEIGHT);

    if exposure.time_of_day == TimeOfDay::Night {
        ledger.add("overnight demand", LOW_DEMAND_BONUS);
    }
    if exposure.day_type == DayType::Weekend {
        ledger.add("weekend demand", LOW_DEMAND_BONUS);
    }

    ledger.subtract("weather", exposure.weather_risk_index * WEATHER_WEIGHT);

    let resilience = ledger.clamped(0.0, 100.0);
    debug!(average_backup, resilience, "resilience estimated");
    resilience
}
