//! Data models for extracted estimates and pipeline configuration.

pub mod config;
pub mod estimate;

pub use config::EstixConfig;
pub use estimate::{Customer, Estimate, JobType, RepairItem, Vehicle};
