//! Application service layer - config, report pipeline, export

pub mod config;
pub mod export;
pub mod profiles;
pub mod report;
pub mod telemetry;
