use std::path::Path;

use common::tracing::LogLevel;
use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use uplift_gen::params::CURRENT_REVENUE;
use uplift_gen::params::FLOWS_TRIGGERED;

use crate::error::Result;

#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Log {
    pub level: Option<LogLevel>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Scenario {
    pub flows_triggered: Option<i64>,
    pub current_revenue: Option<i64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Chart {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// On-disk configuration. Every key is optional; missing ones fall back to
/// `common::config::Config::default()`.
#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub scenario: Scenario,
    pub chart: Chart,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl TryInto<common::config::Config> for Config {
    type Error = crate::error::Error;

    fn try_into(self) -> Result<common::config::Config> {
        let mut cfg = common::config::Config::default();

        if let Some(level) = self.log.level {
            cfg.log.level = LevelFilter::from(level);
        }

        if let Some(v) = self.scenario.flows_triggered {
            cfg.scenario.flows_triggered = FLOWS_TRIGGERED.validate(v)?;
        }
        if let Some(v) = self.scenario.current_revenue {
            cfg.scenario.current_revenue = CURRENT_REVENUE.validate(v)?;
        }
        cfg.scenario.seed = self.scenario.seed;

        if let Some(v) = self.chart.width {
            cfg.chart.width = v;
        }
        if let Some(v) = self.chart.height {
            cfg.chart.height = v;
        }
        cfg.chart.validate()?;

        Ok(cfg)
    }
}

/// Reads `path` if given, otherwise starts from defaults.
pub fn load(path: Option<&Path>) -> Result<common::config::Config> {
    match path {
        None => Config::default().try_into(),
        Some(path) => Config::from_file(path)?.try_into(),
    }
}
