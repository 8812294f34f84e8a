//! Analytics domain module.
//!
//! Events are write-once and append-only; the renderer never reads them
//! back.

mod event;
mod sink;

// Re-export public API
pub use event::{AnalyticsEvent, AnalyticsEventType};
pub use sink::AnalyticsSink;
