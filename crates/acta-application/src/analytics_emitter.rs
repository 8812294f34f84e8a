//! Fire-and-forget analytics emission.

use acta_core::analytics::{AnalyticsEvent, AnalyticsEventType, AnalyticsSink};
use acta_core::clock::Clock;
use acta_core::config::AnalyticsSettings;
use acta_core::id::IdGenerator;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Builds analytics events and hands them to a sink off the request path.
///
/// Each emission runs as its own tokio task bounded by
/// `emit_timeout_ms`. Sink errors and timeouts are logged at `warn` and
/// dropped; nothing here can fail a render or an interaction.
#[derive(Clone)]
pub struct AnalyticsEmitter {
    sink: Arc<dyn AnalyticsSink>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    settings: AnalyticsSettings,
    /// In-flight emissions, pruned as they finish
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl AnalyticsEmitter {
    pub fn new(
        sink: Arc<dyn AnalyticsSink>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        settings: AnalyticsSettings,
    ) -> Self {
        Self {
            sink,
            ids,
            clock,
            settings,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Schedules one event. Returns whether it was handed to the runtime.
    pub fn emit(
        &self,
        instance_id: &str,
        session_id: &str,
        event_type: AnalyticsEventType,
        payload: Value,
    ) -> bool {
        if !self.settings.enabled {
            tracing::debug!(
                target: "acta::analytics",
                %event_type,
                instance_id,
                "Analytics disabled, dropping event"
            );
            return false;
        }

        let event = AnalyticsEvent {
            event_id: self.ids.next_id(),
            instance_id: instance_id.to_string(),
            session_id: session_id.to_string(),
            event_type,
            timestamp: self.clock.now(),
            payload,
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                target: "acta::analytics",
                event_id = %event.event_id,
                "No async runtime available, dropping analytics event"
            );
            return false;
        };

        let sink = Arc::clone(&self.sink);
        let timeout = Duration::from_millis(self.settings.emit_timeout_ms);
        let handle = runtime.spawn(async move {
            match tokio::time::timeout(timeout, sink.emit(&event)).await {
                Ok(Ok(())) => {
                    tracing::trace!(
                        target: "acta::analytics",
                        event_id = %event.event_id,
                        "Analytics event emitted"
                    );
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        target: "acta::analytics",
                        event_id = %event.event_id,
                        event_type = %event.event_type,
                        "Failed to emit analytics event: {}",
                        e
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        target: "acta::analytics",
                        event_id = %event.event_id,
                        event_type = %event.event_type,
                        timeout_ms = timeout.as_millis() as u64,
                        "Analytics sink timed out"
                    );
                }
            }
        });

        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }
        true
    }

    /// Waits for every emission scheduled so far.
    ///
    /// Each emission is already bounded by the sink timeout, so this
    /// returns within roughly one timeout period.
    pub async fn flush(&self) {
        let handles = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!(target: "acta::analytics", "Analytics task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acta_core::clock::FixedClock;
    use acta_core::error::{ActaError, Result};
    use acta_core::id::SequentialIdGenerator;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<AnalyticsEvent>>,
    }

    #[async_trait]
    impl AnalyticsSink for RecordingSink {
        async fn emit(&self, event: &AnalyticsEvent) -> Result<()> {
            self.events.lock().await.push(event.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl AnalyticsSink for FailingSink {
        async fn emit(&self, _event: &AnalyticsEvent) -> Result<()> {
            Err(ActaError::analytics_sink("collector unreachable"))
        }
    }

    struct StallingSink;

    #[async_trait]
    impl AnalyticsSink for StallingSink {
        async fn emit(&self, _event: &AnalyticsEvent) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    fn emitter(sink: Arc<dyn AnalyticsSink>, settings: AnalyticsSettings) -> AnalyticsEmitter {
        AnalyticsEmitter::new(
            sink,
            Arc::new(SequentialIdGenerator::new("evt")),
            Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
            settings,
        )
    }

    #[tokio::test]
    async fn test_emit_builds_event() {
        let sink = Arc::new(RecordingSink::default());
        let emitter = emitter(sink.clone(), AnalyticsSettings::default());
        assert!(emitter.emit("inst", "sess", AnalyticsEventType::Impression, Value::Null));
        emitter.flush().await;

        let events = sink.events.lock().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id, "evt-1");
        assert_eq!(events[0].instance_id, "inst");
        assert_eq!(events[0].event_type, AnalyticsEventType::Impression);
    }

    #[tokio::test]
    async fn test_disabled_emitter_drops() {
        let sink = Arc::new(RecordingSink::default());
        let settings = AnalyticsSettings {
            enabled: false,
            ..Default::default()
        };
        let emitter = emitter(sink.clone(), settings);
        assert!(!emitter.emit("i", "s", AnalyticsEventType::Impression, Value::Null));
        emitter.flush().await;
        assert!(sink.events.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_is_swallowed() {
        let emitter = emitter(Arc::new(FailingSink), AnalyticsSettings::default());
        assert!(emitter.emit("i", "s", AnalyticsEventType::Conversion, Value::Null));
        emitter.flush().await;
    }

    #[tokio::test]
    async fn test_stalled_sink_times_out() {
        let settings = AnalyticsSettings {
            enabled: true,
            emit_timeout_ms: 50,
        };
        let emitter = emitter(Arc::new(StallingSink), settings);
        assert!(emitter.emit("i", "s", AnalyticsEventType::Interaction, Value::Null));
        let flushed = tokio::time::timeout(Duration::from_secs(5), emitter.flush()).await;
        assert!(flushed.is_ok());
    }

    #[test]
    fn test_emit_without_runtime_is_dropped() {
        let sink = Arc::new(RecordingSink::default());
        let emitter = emitter(sink, AnalyticsSettings::default());
        assert!(!emitter.emit("i", "s", AnalyticsEventType::Impression, Value::Null));
    }
}
