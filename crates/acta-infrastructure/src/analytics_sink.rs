//! Analytics sink implementations.

use acta_core::analytics::{AnalyticsEvent, AnalyticsSink};
use acta_core::error::{ActaError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Writes each event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsSink;

#[async_trait]
impl AnalyticsSink for TracingAnalyticsSink {
    async fn emit(&self, event: &AnalyticsEvent) -> Result<()> {
        tracing::info!(
            target: "acta::analytics",
            event_id = %event.event_id,
            event_type = %event.event_type,
            instance_id = %event.instance_id,
            session_id = %event.session_id,
            payload = %event.payload,
            "analytics event"
        );
        Ok(())
    }
}

/// Appends events to a JSON Lines file, one event per line.
///
/// The file is opened in append mode for every write and never read back.
#[derive(Debug, Clone)]
pub struct JsonlAnalyticsSink {
    path: PathBuf,
    /// Serializes appends so lines never interleave
    write_lock: Arc<Mutex<()>>,
}

impl JsonlAnalyticsSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl AnalyticsSink for JsonlAnalyticsSink {
    async fn emit(&self, event: &AnalyticsEvent) -> Result<()> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                ActaError::analytics_sink(format!("Failed to open {:?}: {}", self.path, e))
            })?;
        file.write_all(line.as_bytes()).await.map_err(|e| {
            ActaError::analytics_sink(format!("Failed to append to {:?}: {}", self.path, e))
        })?;
        file.flush()
            .await
            .map_err(|e| ActaError::analytics_sink(e.to_string()))?;
        Ok(())
    }
}

/// Keeps events in memory; used by tests and by the CLI summary.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalyticsSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl InMemoryAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }
}

#[async_trait]
impl AnalyticsSink for InMemoryAnalyticsSink {
    async fn emit(&self, event: &AnalyticsEvent) -> Result<()> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
