pub mod batch_builder;
pub mod error;
pub mod generator;
pub mod params;
pub mod series;
pub mod store;
pub mod totals;

pub use generator::Generator;
pub use params::ScenarioParameters;
pub use series::DailySample;
pub use series::Series;
pub use totals::SeriesTotals;
