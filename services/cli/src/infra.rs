use outage_intel::config::{AppConfig, CatalogFiles};
use outage_intel::error::AppError;
use outage_intel::outage::{ContextSource, SeededContext, SystemContext, ZoneAnalyzer, ZoneCatalog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub(crate) type SharedContext = Arc<dyn ContextSource>;

/// Flag overrides layered on top of the loaded configuration.
#[derive(Debug, Default, Clone)]
pub(crate) struct Overrides {
    pub(crate) seed: Option<u64>,
    pub(crate) zones_csv: Option<PathBuf>,
    pub(crate) hospitals_csv: Option<PathBuf>,
}

fn catalog_files(config: &AppConfig, overrides: &Overrides) -> Option<CatalogFiles> {
    match (&overrides.zones_csv, &overrides.hospitals_csv) {
        (Some(zones), Some(hospitals)) => Some(CatalogFiles {
            zones: zones.clone(),
            hospitals: hospitals.clone(),
        }),
        _ => config.catalog.csv.clone(),
    }
}

pub(crate) fn load_catalog(
    config: &AppConfig,
    overrides: &Overrides,
) -> Result<Arc<ZoneCatalog>, AppError> {
    match catalog_files(config, overrides) {
        Some(files) => {
            let catalog = ZoneCatalog::from_csv_paths(&files.zones, &files.hospitals)?;
            info!(
                zones = catalog.len(),
                path = %files.zones.display(),
                "zone catalog imported"
            );
            Ok(Arc::new(catalog))
        }
        None => Ok(ZoneCatalog::standard()),
    }
}

pub(crate) fn context_source(config: &AppConfig, overrides: &Overrides) -> SharedContext {
    match overrides.seed.or(config.context.weather_seed) {
        Some(seed) => Arc::new(SeededContext::new(seed)),
        None => Arc::new(SystemContext),
    }
}

pub(crate) fn build_analyzer(
    config: &AppConfig,
    overrides: &Overrides,
) -> Result<ZoneAnalyzer<SharedContext>, AppError> {
    let catalog = load_catalog(config, overrides)?;
    Ok(ZoneAnalyzer::new(catalog, context_source(config, overrides)))
}
