use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub context: ContextConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let zones_csv = optional_var("OUTAGE_ZONES_CSV").map(PathBuf::from);
        let hospitals_csv = optional_var("OUTAGE_HOSPITALS_CSV").map(PathBuf::from);
        let catalog = CatalogConfig::new(zones_csv, hospitals_csv)?;

        let weather_seed = optional_var("OUTAGE_WEATHER_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidWeatherSeed)
            })
            .transpose()?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            catalog,
            context: ContextConfig { weather_seed },
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Optional CSV exports replacing the built-in zone catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub csv: Option<CatalogFiles>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFiles {
    pub zones: PathBuf,
    pub hospitals: PathBuf,
}

impl CatalogConfig {
    /// Both exports or neither; a lone file is a configuration error.
    pub fn new(zones: Option<PathBuf>, hospitals: Option<PathBuf>) -> Result<Self, ConfigError> {
        match (zones, hospitals) {
            (Some(zones), Some(hospitals)) => Ok(Self {
                csv: Some(CatalogFiles { zones, hospitals }),
            }),
            (None, None) => Ok(Self { csv: None }),
            _ => Err(ConfigError::IncompleteCatalog),
        }
    }
}

/// Situational context controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextConfig {
    /// Seed for reproducible weather samples; live randomness when unset.
    pub weather_seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWeatherSeed,
    IncompleteCatalog,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeatherSeed => {
                write!(f, "OUTAGE_WEATHER_SEED must be an unsigned 64-bit integer")
            }
            ConfigError::IncompleteCatalog => write!(
                f,
                "OUTAGE_ZONES_CSV and OUTAGE_HOSPITALS_CSV must be set together"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
