use enum_iterator::all;
use enum_iterator::Sequence;
use strum_macros::Display;

use crate::series::DailySample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesTotals {
    pub total_flows_baseline: i64,
    pub total_flows_uplifted: i64,
    pub total_revenue_baseline: i64,
    pub total_revenue_uplifted: i64,
    pub additional_flows: i64,
    pub additional_revenue: i64,
}

impl SeriesTotals {
    /// Each total is the float sum truncated toward zero; deltas are taken after truncation.
    pub fn from_samples(samples: &[DailySample]) -> Self {
        let sum = |f: fn(&DailySample) -> f64| samples.iter().map(f).sum::<f64>() as i64;

        let total_flows_baseline = sum(|s| s.flows_baseline);
        let total_flows_uplifted = sum(|s| s.flows_uplifted);
        let total_revenue_baseline = sum(|s| s.revenue_baseline);
        let total_revenue_uplifted = sum(|s| s.revenue_uplifted);

        Self {
            total_flows_baseline,
            total_flows_uplifted,
            total_revenue_baseline,
            total_revenue_uplifted,
            additional_flows: total_flows_uplifted - total_flows_baseline,
            additional_revenue: total_revenue_uplifted - total_revenue_baseline,
        }
    }

    pub fn metric(&self, metric: Metric) -> MetricValue {
        let (value, delta) = match metric {
            Metric::FlowsWithoutSonar => (self.total_flows_baseline, None),
            Metric::FlowsWithSonar => (self.total_flows_uplifted, Some(self.additional_flows)),
            Metric::AdditionalFlows => (self.additional_flows, None),
            Metric::RevenueWithoutSonar => (self.total_revenue_baseline, None),
            Metric::RevenueWithSonar => (
                self.total_revenue_uplifted,
                Some(self.additional_revenue),
            ),
            Metric::AdditionalRevenue => (self.additional_revenue, None),
        };

        MetricValue {
            metric,
            value,
            delta,
        }
    }

    pub fn metrics(&self) -> Vec<MetricValue> {
        all::<Metric>().map(|m| self.metric(m)).collect()
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum MetricGroup {
    Flows,
    Revenue,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Metric {
    #[strum(serialize = "Total Flows Triggered (Without Sonar)")]
    FlowsWithoutSonar,
    #[strum(serialize = "Total Flows Triggered (With Sonar)")]
    FlowsWithSonar,
    #[strum(serialize = "Additional Flows Triggered")]
    AdditionalFlows,
    #[strum(serialize = "Total Revenue ($) (Without Sonar)")]
    RevenueWithoutSonar,
    #[strum(serialize = "Total Revenue ($) (With Sonar)")]
    RevenueWithSonar,
    #[strum(serialize = "Additional Revenue ($)")]
    AdditionalRevenue,
}

impl Metric {
    pub fn group(&self) -> MetricGroup {
        match self {
            Metric::FlowsWithoutSonar | Metric::FlowsWithSonar | Metric::AdditionalFlows => {
                MetricGroup::Flows
            }
            Metric::RevenueWithoutSonar | Metric::RevenueWithSonar | Metric::AdditionalRevenue => {
                MetricGroup::Revenue
            }
        }
    }

    /// Additional-* cards show their value with an explicit sign.
    pub fn is_signed(&self) -> bool {
        matches!(self, Metric::AdditionalFlows | Metric::AdditionalRevenue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricValue {
    pub metric: Metric,
    pub value: i64,
    pub delta: Option<i64>,
}
