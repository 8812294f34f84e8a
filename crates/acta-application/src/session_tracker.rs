//! Session & conversion tracking.
//!
//! Sessions are written with optimistic concurrency: every interaction is a
//! versioned upsert against the version last read. A lost race re-reads and
//! retries; once the attempts configured in `SessionSettings` are used up
//! the patch is applied unconditionally, which is safe because the merge
//! is monotone (counts add, conversion only ORs in).

use acta_core::clock::Clock;
use acta_core::config::SessionSettings;
use acta_core::error::{ActaError, Result};
use acta_core::session::{
    ConversionDetail, InteractionData, InteractionKind, Session, SessionKey, SessionPatch,
    SessionRepository, is_conversion_event,
};
use std::sync::Arc;

/// Result of recording one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInteraction {
    /// The session after the interaction was applied
    pub session: Session,
    /// Whether this interaction itself is a conversion event
    pub is_conversion: bool,
}

#[derive(Clone)]
pub struct SessionTracker {
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    settings: SessionSettings,
}

impl SessionTracker {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            repository,
            clock,
            settings,
        }
    }

    /// Returns the session for `key`, creating it when missing.
    ///
    /// A missing session (never created, or reaped while idle) is simply
    /// created again.
    pub async fn open(&self, key: &SessionKey) -> Result<Session> {
        if let Some(existing) = self.repository.get(key).await? {
            return Ok(existing);
        }

        match self
            .repository
            .upsert(key, SessionPatch::open(self.clock.now()))
            .await
        {
            Ok(session) => {
                tracing::debug!(
                    target: "acta::session",
                    instance_id = %key.instance_id,
                    session_id = %key.session_id,
                    "Session created"
                );
                Ok(session)
            }
            // created concurrently by another request
            Err(e) if e.is_session_conflict() => self.repository.get(key).await?.ok_or_else(|| {
                ActaError::internal(format!(
                    "session {}/{} vanished after a create conflict",
                    key.instance_id, key.session_id
                ))
            }),
            Err(e) => Err(e),
        }
    }

    /// Records one interaction and returns the updated session.
    pub async fn record(
        &self,
        key: &SessionKey,
        kind: &InteractionKind,
        data: &InteractionData,
    ) -> Result<RecordedInteraction> {
        let now = self.clock.now();
        let is_conversion = is_conversion_event(kind, data);
        let conversion = is_conversion.then(|| ConversionDetail {
            interaction_type: kind.to_string(),
            value: data.conversion_value,
            converted_at: now,
        });
        let patch = SessionPatch::interaction(now, conversion);

        let attempts = self.settings.max_update_attempts.max(1);
        for attempt in 1..=attempts {
            let expected = self
                .repository
                .get(key)
                .await?
                .map_or(0, |session| session.version);

            match self
                .repository
                .upsert(key, patch.clone().expecting(expected))
                .await
            {
                Ok(session) => {
                    self.log_recorded(&session, kind, is_conversion);
                    return Ok(RecordedInteraction {
                        session,
                        is_conversion,
                    });
                }
                Err(e) if e.is_session_conflict() => {
                    tracing::debug!(
                        target: "acta::session",
                        instance_id = %key.instance_id,
                        session_id = %key.session_id,
                        attempt,
                        "Session update conflict: {}",
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            target: "acta::session",
            instance_id = %key.instance_id,
            session_id = %key.session_id,
            "Falling back to unconditional merge"
        );
        let session = self.repository.upsert(key, patch.unconditional()).await?;
        self.log_recorded(&session, kind, is_conversion);
        Ok(RecordedInteraction {
            session,
            is_conversion,
        })
    }

    fn log_recorded(&self, session: &Session, kind: &InteractionKind, is_conversion: bool) {
        tracing::debug!(
            target: "acta::session",
            instance_id = %session.instance_id,
            session_id = %session.session_id,
            interaction_type = %kind,
            interaction_count = session.interaction_count,
            is_conversion,
            state = %session.state(),
            "Interaction recorded"
        );
    }
}
