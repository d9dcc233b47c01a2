use clap::Parser;
use common::config::Config;
use tracing::info;
use uplift_gen::params::CURRENT_REVENUE;
use uplift_gen::params::FLOWS_TRIGGERED;
use uplift_gen::ScenarioParameters;

pub mod export;
pub mod page;

fn parse_flows_triggered(s: &str) -> Result<i64, String> {
    let v = s.parse::<i64>().map_err(|err| err.to_string())?;
    FLOWS_TRIGGERED.validate(v).map_err(|err| err.to_string())
}

fn parse_current_revenue(s: &str) -> Result<i64, String> {
    let v = s.parse::<i64>().map_err(|err| err.to_string())?;
    CURRENT_REVENUE.validate(v).map_err(|err| err.to_string())
}

/// Scenario inputs shared by every command. Unset flags keep the config value.
#[derive(Parser, Clone, Debug, Default)]
pub struct ScenarioArgs {
    /// Klaviyo flows triggered daily (1..=500)
    #[arg(long, value_parser = parse_flows_triggered)]
    pub flows_triggered: Option<i64>,
    /// Current daily revenue from these flows in dollars (100..=1000, step 10)
    #[arg(long, value_parser = parse_current_revenue)]
    pub current_revenue: Option<i64>,
    /// Seed for repeatable series
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ScenarioArgs {
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(v) = self.flows_triggered {
            cfg.scenario.flows_triggered = v;
        }
        if let Some(v) = self.current_revenue {
            cfg.scenario.current_revenue = v;
        }
        if self.seed.is_some() {
            cfg.scenario.seed = self.seed;
        }
    }
}

pub(crate) fn scenario_params(cfg: &Config) -> ScenarioParameters {
    let params = ScenarioParameters::new(
        cfg.scenario.flows_triggered,
        cfg.scenario.current_revenue,
    );
    info!(
        "flows triggered: {}, current revenue: ${}",
        params.flows_triggered, params.current_revenue
    );

    params
}
