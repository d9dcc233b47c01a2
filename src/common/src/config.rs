use tracing::level_filters::LevelFilter;

use crate::error::CommonError;
use crate::error::Result;
use crate::types::DEFAULT_CHART_HEIGHT;
use crate::types::DEFAULT_CHART_WIDTH;
use crate::types::DEFAULT_CURRENT_REVENUE;
use crate::types::DEFAULT_FLOWS_TRIGGERED;

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub flows_triggered: i64,
    pub current_revenue: i64,
    /// Fixed seed for repeatable series. `None` draws a fresh one every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub width: usize,
    pub height: usize,
}

impl Chart {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CommonError::BadRequest(format!(
                "chart size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log: Log,
    pub scenario: Scenario,
    pub chart: Chart,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log {
                level: LevelFilter::INFO,
            },
            scenario: Scenario {
                flows_triggered: DEFAULT_FLOWS_TRIGGERED,
                current_revenue: DEFAULT_CURRENT_REVENUE,
                seed: None,
            },
            chart: Chart {
                width: DEFAULT_CHART_WIDTH,
                height: DEFAULT_CHART_HEIGHT,
            },
        }
    }
}
