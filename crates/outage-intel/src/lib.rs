pub mod config;
pub mod error;
pub mod outage;
pub mod telemetry;
