mod import;
mod seed;

pub use import::CatalogImportError;

use super::domain::ZoneBaseline;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Baseline applied to any zone the catalog does not know.
static FALLBACK_BASELINE: ZoneBaseline = ZoneBaseline {
    population_density: 2000.0,
    population_exposed: 30_000,
    hospital_count: 0,
    hospital_type_score: 0.0,
    traffic_dependency: 40.0,
    water_dependency: 40.0,
    telecom_dependency: 40.0,
    hospitals: Vec::new(),
};

/// Read-only zone knowledge base with an explicit default record.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: Vec<(String, ZoneBaseline)>,
    index: HashMap<String, usize>,
}

impl ZoneCatalog {
    /// Process-wide catalog holding the reference zones, built on first use.
    pub fn standard() -> Arc<Self> {
        static STANDARD: OnceLock<Arc<ZoneCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Arc::new(Self::from_entries(seed::reference_zones())))
            .clone()
    }

    /// Load zones and hospitals exported as CSV.
    pub fn from_csv_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        zones: P,
        hospitals: Q,
    ) -> Result<Self, CatalogImportError> {
        let zones = std::fs::File::open(zones)?;
        let hospitals = std::fs::File::open(hospitals)?;
        Self::from_csv_readers(zones, hospitals)
    }

    pub fn from_csv_readers<Z: Read, H: Read>(
        zones: Z,
        hospitals: H,
    ) -> Result<Self, CatalogImportError> {
        let entries = import::read_catalog(zones, hospitals)?;
        Ok(Self::from_entries(entries))
    }

    /// Entries keep their given order; a later duplicate id replaces the earlier baseline.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ZoneBaseline)>,
    {
        let mut catalog = Self::default();
        for (zone_id, baseline) in entries {
            match catalog.index.get(&zone_id) {
                Some(&slot) => catalog.zones[slot].1 = baseline,
                None => {
                    catalog.index.insert(zone_id.clone(), catalog.zones.len());
                    catalog.zones.push((zone_id, baseline));
                }
            }
        }
        catalog
    }

    /// Baseline for `zone_id`, or the default baseline when unknown.
    pub fn lookup(&self, zone_id: &str) -> &ZoneBaseline {
        self.get(zone_id).unwrap_or(&FALLBACK_BASELINE)
    }

    pub fn get(&self, zone_id: &str) -> Option<&ZoneBaseline> {
        self.index.get(zone_id).map(|&slot| &self.zones[slot].1)
    }

    pub fn contains(&self, zone_id: &str) -> bool {
        self.index.contains_key(zone_id)
    }

    pub fn zone_ids(&self) -> Vec<&str> {
        self.zones.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn fallback() -> &'static ZoneBaseline {
        &FALLBACK_BASELINE
    }
}
