//! Route-loading KPI domain
//!
//! Models the daily loading sheet and the pure pipeline that turns it into
//! dashboard figures: normalize -> filter -> tally -> evaluate goals.

pub mod model;
pub mod service;
pub mod source;

pub use model::*;
pub use source::GridSource;
