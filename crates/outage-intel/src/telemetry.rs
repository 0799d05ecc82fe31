use crate::config::TelemetryConfig;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::EnvFilter;

/// Targets a bare `APP_LOG_LEVEL` applies to; every other target stays at `warn`.
const PLANNER_TARGETS: [&str; 2] = ["outage_intel", "outage_intel_cli"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expands a bare level such as `debug` into per-target directives for the
/// planner crates. Full directive strings pass through untouched.
fn planner_directives(log_level: &str) -> String {
    let log_level = log_level.trim();
    match log_level.parse::<LevelFilter>() {
        Ok(level) => {
            let mut directives = vec![LevelFilter::WARN.min(level).to_string()];
            directives.extend(
                PLANNER_TARGETS
                    .iter()
                    .map(|target| format!("{target}={level}")),
            );
            directives.join(",").to_ascii_lowercase()
        }
        Err(_) => log_level.to_string(),
    }
}

fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(planner_directives(&config.log_level)).map_err(|source| {
        TelemetryError::EnvFilter {
            value: config.log_level.clone(),
            source,
        }
    })
}

/// Install the global subscriber. Logs go to stderr so stdout can carry JSON reports.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_scopes_to_planner_crates() {
        assert_eq!(
            planner_directives("debug"),
            "warn,outage_intel=debug,outage_intel_cli=debug"
        );
        assert_eq!(
            planner_directives(" ERROR "),
            "error,outage_intel=error,outage_intel_cli=error"
        );
    }

    #[test]
    fn directive_strings_pass_through() {
        assert_eq!(
            planner_directives("info,outage_intel::outage::scoring=trace"),
            "info,outage_intel::outage::scoring=trace"
        );
    }

    #[test]
    fn rejects_unparseable_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "outage_intel=loud".to_string(),
        };

        match env_filter(&config) {
            Err(TelemetryError::EnvFilter { value, .. }) => assert_eq!(value, "outage_intel=loud"),
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
