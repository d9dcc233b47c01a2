//! Literal reference tables shown next to the generated charts.

pub mod shops;
pub mod visitors;
