//! Situational context sampled at analysis time.
//!
//! Time of day and day type come from the local wall clock. The weather risk
//! index is a synthetic sample standing in for a forecast feed.

use super::domain::{DayType, SituationalContext, TimeOfDay};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Lower bound (inclusive) of the synthetic weather risk sample.
pub const WEATHER_RISK_MIN: u8 = 10;
/// Upper bound (exclusive) of the synthetic weather risk sample.
pub const WEATHER_RISK_MAX: u8 = 50;

/// Source of situational context. Evaluated once per analysis, never cached.
pub trait ContextSource: Send + Sync {
    fn current(&self) -> SituationalContext;
}

impl SituationalContext {
    /// Context for a given instant with an already sampled weather index.
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>, weather_risk_index: f64) -> Self {
        Self {
            time_of_day: TimeOfDay::from_hour(instant.hour()),
            day_type: DayType::from_weekday(instant.weekday()),
            weather_risk_index,
        }
    }
}

fn sample_weather<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(WEATHER_RISK_MIN..WEATHER_RISK_MAX))
}

/// Wall clock plus a thread-local random weather sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemContext;

impl ContextSource for SystemContext {
    fn current(&self) -> SituationalContext {
        let weather = sample_weather(&mut rand::thread_rng());
        SituationalContext::at(&Local::now(), weather)
    }
}

/// Wall clock plus a seeded weather stream, for reproducible runs.
#[derive(Debug)]
pub struct SeededContext {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededContext {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl ContextSource for SeededContext {
    fn current(&self) -> SituationalContext {
        let weather = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            sample_weather(&mut *rng)
        };
        SituationalContext::at(&Local::now(), weather)
    }
}

/// Pinned context for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContext(pub SituationalContext);

impl FixedContext {
    pub fn new(time_of_day: TimeOfDay, day_type: DayType, weather_risk_index: f64) -> Self {
        Self(SituationalContext {
            time_of_day,
            day_type,
            weather_risk_index,
        })
    }
}

impl ContextSource for FixedContext {
    fn current(&self) -> SituationalContext {
        self.0
    }
}

impl<C: ContextSource + ?Sized> ContextSource for std::sync::Arc<C> {
    fn current(&self) -> SituationalContext {
        (**self).current()
    }
}
