use enum_iterator::Sequence;
use strum_macros::Display;

use crate::totals::SeriesTotals;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySample {
    pub day: usize,
    pub flows_baseline: f64,
    pub flows_uplifted: f64,
    pub revenue_baseline: f64,
    pub revenue_uplifted: f64,
}

/// Which pair of columns a chart or batch is built from.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum SeriesKind {
    #[strum(serialize = "Flows Triggered")]
    Flows,
    #[strum(serialize = "Revenue Generated")]
    Revenue,
}

impl DailySample {
    /// `(baseline, uplifted)` for the given kind.
    pub fn pair(&self, kind: SeriesKind) -> (f64, f64) {
        match kind {
            SeriesKind::Flows => (self.flows_baseline, self.flows_uplifted),
            SeriesKind::Revenue => (self.revenue_baseline, self.revenue_uplifted),
        }
    }
}

/// Generated days ordered by `day`, starting at 1 with no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<DailySample>,
}

impl Series {
    pub(crate) fn new(samples: Vec<DailySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[DailySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn totals(&self) -> SeriesTotals {
        SeriesTotals::from_samples(&self.samples)
    }
}
