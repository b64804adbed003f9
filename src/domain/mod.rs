// Domain layer - Core records, transforms, and chart models
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod display;
pub mod series;
pub mod units;
pub mod usage;
