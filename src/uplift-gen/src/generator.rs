use common::CHART_DAYS;
use rand::distributions::Distribution;
use rand::distributions::Uniform;
use rand::Rng;
use statrs::distribution::Normal;
use tracing::debug;

use crate::error::Result;
use crate::error::UpliftGenError;
use crate::params::ScenarioParameters;
use crate::series::DailySample;
use crate::series::Series;

/// Closed interval a daily uplift factor is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpliftRange {
    pub min: f64,
    pub max: f64,
}

impl UpliftRange {
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(UpliftGenError::InvalidParameter(format!(
                "bad uplift range [{min}, {max}]"
            )));
        }

        Ok(Self { min, max })
    }

    fn distribution(&self) -> Result<Uniform<f64>> {
        // Uniform::new_inclusive panics on these, so check up front
        let range = Self::try_new(self.min, self.max)?;
        Ok(Uniform::new_inclusive(range.min, range.max))
    }
}

pub const FLOW_UPLIFT: UpliftRange = UpliftRange {
    min: 1.30,
    max: 1.50,
};

pub const REVENUE_UPLIFT: UpliftRange = UpliftRange {
    min: 1.18,
    max: 1.26,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub days: usize,
    pub growth_midpoint: f64,
    pub growth_scale: f64,
    pub noise_std_dev: f64,
    pub flow_uplift: UpliftRange,
    pub revenue_uplift: UpliftRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: CHART_DAYS,
            growth_midpoint: 45.,
            growth_scale: 15.,
            noise_std_dev: 5.,
            flow_uplift: FLOW_UPLIFT,
            revenue_uplift: REVENUE_UPLIFT,
        }
    }
}

/// Slow start, steep middle, flat end: `0.5 * (1 + tanh((day - midpoint) / scale))`.
pub fn growth(day: usize, midpoint: f64, scale: f64) -> f64 {
    0.5 * (1. + ((day as f64 - midpoint) / scale).tanh())
}

pub struct Generator {
    cfg: Config,
    noise: Normal,
    flow_uplift: Uniform<f64>,
    revenue_uplift: Uniform<f64>,
}

impl Generator {
    pub fn try_new(cfg: Config) -> Result<Self> {
        if cfg.days == 0 {
            return Err(UpliftGenError::InvalidParameter(
                "days must be positive".to_string(),
            ));
        }
        if cfg.growth_scale == 0. || !cfg.growth_scale.is_finite() {
            return Err(UpliftGenError::InvalidParameter(format!(
                "bad growth scale {}",
                cfg.growth_scale
            )));
        }

        let noise = Normal::new(0., cfg.noise_std_dev).map_err(|err| {
            UpliftGenError::InvalidParameter(format!(
                "noise std dev {}: {err}",
                cfg.noise_std_dev
            ))
        })?;
        let flow_uplift = cfg.flow_uplift.distribution()?;
        let revenue_uplift = cfg.revenue_uplift.distribution()?;

        Ok(Self {
            cfg,
            noise,
            flow_uplift,
            revenue_uplift,
        })
    }

    pub fn growth(&self, day: usize) -> f64 {
        growth(day, self.cfg.growth_midpoint, self.cfg.growth_scale)
    }

    /// Draws a fresh pair of baseline/uplifted series. Every day takes, in order,
    /// one noise sample, one flow uplift factor and one revenue uplift factor.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        params: &ScenarioParameters,
        rng: &mut R,
    ) -> Result<Series> {
        if params.flows_triggered <= 0 {
            return Err(UpliftGenError::InvalidParameter(format!(
                "flows triggered must be positive, got {}",
                params.flows_triggered
            )));
        }

        let flows_triggered = params.flows_triggered as f64;
        let current_revenue = params.current_revenue as f64;

        let samples = (1..=self.cfg.days)
            .map(|day| {
                let flows_baseline =
                    flows_triggered * (0.5 + self.growth(day)) + self.noise.sample(rng);
                let flows_uplifted = flows_baseline * self.flow_uplift.sample(rng);
                let revenue_baseline = flows_baseline / flows_triggered * current_revenue;
                let revenue_uplifted = revenue_baseline * self.revenue_uplift.sample(rng);

                DailySample {
                    day,
                    flows_baseline,
                    flows_uplifted,
                    revenue_baseline,
                    revenue_uplifted,
                }
            })
            .collect::<Vec<_>>();

        let series = Series::new(samples);
        let totals = series.totals();
        debug!(
            flows_triggered = params.flows_triggered,
            current_revenue = params.current_revenue,
            additional_flows = totals.additional_flows,
            additional_revenue = totals.additional_revenue,
            "generated {} days",
            series.len()
        );

        Ok(series)
    }
}
