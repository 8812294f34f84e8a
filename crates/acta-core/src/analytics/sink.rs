//! Analytics sink trait.

use super::event::AnalyticsEvent;
use crate::error::Result;
use async_trait::async_trait;

/// Best-effort destination for analytics events.
///
/// Errors returned here are logged and dropped by the caller; they never
/// reach a render or interaction response.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn emit(&self, event: &AnalyticsEvent) -> Result<()>;
}
