//! In-memory session store.
//!
//! A single mutex serializes writes, which gives per-key arrival ordering
//! and makes every `upsert` an atomic read-check-apply.

use acta_core::error::{ActaError, Result};
use acta_core::session::{Session, SessionKey, SessionPatch, SessionRepository};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionKey, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Drops sessions idle for longer than `idle_for` and returns how many
    /// were removed.
    pub async fn reap_idle(&self, now: DateTime<Utc>, idle_for: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, s| {
            let last_seen = s.last_interaction_at.unwrap_or(s.started_at);
            now - last_seen <= idle_for
        });
        let reaped = before - sessions.len();
        if reaped > 0 {
            tracing::info!(target: "acta::session", reaped, "Reaped idle sessions");
        }
        reaped
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, key: &SessionKey) -> Result<Option<Session>> {
        Ok(self.sessions.lock().await.get(key).cloned())
    }

    async fn upsert(&self, key: &SessionKey, patch: SessionPatch) -> Result<Session> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .entry(key.clone())
            .or_insert_with(|| Session::new(key, patch.at));

        if let Some(expected) = patch.expected_version {
            if session.version != expected {
                let actual = session.version;
                if actual == 0 {
                    // entry was only just inserted for this check
                    sessions.remove(key);
                }
                return Err(ActaError::SessionConflict {
                    instance_id: key.instance_id.clone(),
                    session_id: key.session_id.clone(),
                    expected,
                    actual,
                });
            }
        }

        session.apply(&patch);
        Ok(session.clone())
    }
}
