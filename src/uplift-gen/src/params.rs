use std::ops::RangeInclusive;

use common::types::DEFAULT_CURRENT_REVENUE;
use common::types::DEFAULT_FLOWS_TRIGGERED;

use crate::error::Result;
use crate::error::UpliftGenError;

/// A bounded input control: an integer range walked in fixed steps from `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

pub const FLOWS_TRIGGERED: Control = Control {
    label: "How many Klaviyo flows are currently being triggered daily?",
    min: 1,
    max: 500,
    step: 1,
    default: DEFAULT_FLOWS_TRIGGERED,
};

pub const CURRENT_REVENUE: Control = Control {
    label: "What is the current daily revenue from these flows? ($)",
    min: 100,
    max: 1000,
    step: 10,
    default: DEFAULT_CURRENT_REVENUE,
};

impl Control {
    pub fn range(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    pub fn validate(&self, value: i64) -> Result<i64> {
        if !self.range().contains(&value) {
            return Err(UpliftGenError::InvalidParameter(format!(
                "{value} is out of range {}..={}",
                self.min, self.max
            )));
        }

        if (value - self.min) % self.step != 0 {
            return Err(UpliftGenError::InvalidParameter(format!(
                "{value} is not a multiple of step {} starting from {}",
                self.step, self.min
            )));
        }

        Ok(value)
    }
}

/// Inputs of one render. Bounds are enforced by the controls, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioParameters {
    pub flows_triggered: i64,
    pub current_revenue: i64,
}

impl ScenarioParameters {
    pub fn new(flows_triggered: i64, current_revenue: i64) -> Self {
        Self {
            flows_triggered,
            current_revenue,
        }
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            flows_triggered: FLOWS_TRIGGERED.default,
            current_revenue: CURRENT_REVENUE.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(FLOWS_TRIGGERED.validate(FLOWS_TRIGGERED.default).unwrap(), 300);
        assert_eq!(CURRENT_REVENUE.validate(CURRENT_REVENUE.default).unwrap(), 500);
        assert_eq!(
            ScenarioParameters::default(),
            ScenarioParameters::new(300, 500)
        );
    }

    #[test]
    fn test_bounds() {
        assert!(FLOWS_TRIGGERED.validate(1).is_ok());
        assert!(FLOWS_TRIGGERED.validate(500).is_ok());
        assert!(FLOWS_TRIGGERED.validate(0).is_err());
        assert!(FLOWS_TRIGGERED.validate(501).is_err());
        assert!(CURRENT_REVENUE.validate(100).is_ok());
        assert!(CURRENT_REVENUE.validate(1000).is_ok());
        assert!(CURRENT_REVENUE.validate(90).is_err());
        assert!(CURRENT_REVENUE.validate(1010).is_err());
    }

    #[test]
    fn test_step() {
        assert!(CURRENT_REVENUE.validate(110).is_ok());
        assert!(matches!(
            CURRENT_REVENUE.validate(105),
            Err(UpliftGenError::InvalidParameter(_))
        ));
    }
}
