//! In-process observability helpers.

pub mod analytics;

pub use analytics::{Analytics, AnalyticsSummary, EventRecord};
