use std::time::Duration;

use log::*;
use serde::Deserialize;

use crate::data::Direction;
use crate::error::TrackerError;

pub const DEFAULT_CONFIG: &str = "rapid-tracker";
pub const ENV_PREFIX: &str = "TRACKER";

/// Settings read from `rapid-tracker.toml` and `TRACKER_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Base URL or directory holding the `timetable_*.json` files.
    pub source: String,
    pub direction: Direction,
    pub refresh_millis: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            source: "data".to_owned(),
            direction: Direction::default(),
            refresh_millis: 1000,
        }
    }
}

impl TrackerConfig {
    /// Loads the optional config file `name` (extension inferred), then
    /// layers environment variables on top.
    pub fn load(name: &str) -> Result<Self, TrackerError> {
        info!("Loading configuration from {} and {}_* variables", name, ENV_PREFIX);
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let ret: Self = settings.try_deserialize()?;
        ret.validate()?;
        Ok(ret)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_millis)
    }

    fn validate(&self) -> Result<(), TrackerError> {
        if self.refresh_millis == 0 {
            return Err(TrackerError::InvalidValue {
                field: "refresh_millis",
                value: self.refresh_millis.to_string(),
            });
        }
        if self.source.trim().is_empty() {
            return Err(TrackerError::InvalidValue {
                field: "source",
                value: self.source.clone(),
            });
        }
        Ok(())
    }
}
