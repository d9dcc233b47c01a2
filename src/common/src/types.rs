pub const CHART_DAYS: usize = 90;

pub const DEFAULT_FLOWS_TRIGGERED: i64 = 300;
pub const DEFAULT_CURRENT_REVENUE: i64 = 500;
pub const DEFAULT_CHART_WIDTH: usize = 90;
pub const DEFAULT_CHART_HEIGHT: usize = 12;

pub const COLUMN_DAY: &str = "Day";
pub const COLUMN_WITHOUT_SONAR: &str = "Without Sonar";
pub const COLUMN_WITH_SONAR: &str = "With Sonar";

pub const COLUMN_VISITOR_NAME: &str = "Visitor Name";
pub const COLUMN_EMAIL: &str = "Email";
pub const COLUMN_CHECKOUT_DATE: &str = "Checkout Date";
pub const COLUMN_MATCHED_WITHOUT_SONAR: &str = "Matched Without Sonar";
pub const COLUMN_MATCHED_WITH_SONAR: &str = "Matched With Sonar";
pub const COLUMN_ADDITIONAL_EVENTS: &str = "Additional Events Captured by Sonar";

pub const COLUMN_SHOP_NAME: &str = "Shop Name";
pub const COLUMN_GMV_TIER: &str = "GMV Tier";
pub const COLUMN_TOTAL_CONVERTED_USD: &str = "Total CV Conv to Usd";
pub const COLUMN_SONAR_CONVERTED_USD: &str = "Sonar CV Conv Usd";
pub const COLUMN_PERCENT_INCREASE: &str = "% Increase in Revenue from Sonar";

pub const EXPORT_COLUMN_DAY: &str = "day";
pub const EXPORT_COLUMN_FLOWS_WITHOUT_SONAR: &str = "flows_without_sonar";
pub const EXPORT_COLUMN_FLOWS_WITH_SONAR: &str = "flows_with_sonar";
pub const EXPORT_COLUMN_REVENUE_WITHOUT_SONAR: &str = "revenue_without_sonar";
pub const EXPORT_COLUMN_REVENUE_WITH_SONAR: &str = "revenue_with_sonar";
