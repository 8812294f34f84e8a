//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Storage key of a session record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub instance_id: String,
    pub session_id: String,
}

impl SessionKey {
    pub fn new(instance_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            session_id: session_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    /// Opened by a render, no interaction yet
    Created,
    Active,
    Converted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionDetail {
    pub interaction_type: String,
    pub value: Option<f64>,
    pub converted_at: DateTime<Utc>,
}

/// Interaction and conversion record for one (instance, session) pair.
///
/// Mutated only through [`Session::apply`]. Idle sessions are reaped by the
/// store; a missing session is simply created again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub instance_id: String,
    pub started_at: DateTime<Utc>,
    pub last_interaction_at: Option<DateTime<Utc>>,
    pub interaction_count: u64,
    /// One-way flag: once true it never returns to false
    pub is_converted: bool,
    /// The first conversion seen on this session
    pub conversion_detail: Option<ConversionDetail>,
    /// Incremented on every applied patch; 0 means "not stored yet"
    pub version: u64,
}

impl Session {
    pub fn new(key: &SessionKey, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: key.session_id.clone(),
            instance_id: key.instance_id.clone(),
            started_at,
            last_interaction_at: None,
            interaction_count: 0,
            is_converted: false,
            conversion_detail: None,
            version: 0,
        }
    }

    pub fn key(&self) -> SessionKey {
        SessionKey::new(&self.instance_id, &self.session_id)
    }

    pub fn state(&self) -> SessionState {
        if self.is_converted {
            SessionState::Converted
        } else if self.interaction_count > 0 {
            SessionState::Active
        } else {
            SessionState::Created
        }
    }

    /// Applies a patch with the monotone merge rules.
    ///
    /// The count is additive, `last_interaction_at` is last-writer-wins,
    /// `is_converted` only ever ORs in, and the first conversion detail is
    /// kept.
    pub fn apply(&mut self, patch: &SessionPatch) {
        if patch.interactions > 0 {
            self.interaction_count = self.interaction_count.saturating_add(patch.interactions);
            self.last_interaction_at = Some(patch.at);
        }
        if let Some(conversion) = &patch.conversion {
            if !self.is_converted {
                self.conversion_detail = Some(conversion.clone());
            }
            self.is_converted = true;
        }
        self.version += 1;
    }
}

/// A change to a session.
///
/// `expected_version` makes the write conditional: `Some(v)` only applies
/// when the stored version is `v` (0 for a session that must not exist
/// yet); `None` applies unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPatch {
    pub expected_version: Option<u64>,
    pub interactions: u64,
    pub at: DateTime<Utc>,
    pub conversion: Option<ConversionDetail>,
}

impl SessionPatch {
    /// Patch that only makes sure the session exists.
    pub fn open(at: DateTime<Utc>) -> Self {
        Self {
            expected_version: Some(0),
            interactions: 0,
            at,
            conversion: None,
        }
    }

    /// Patch recording one interaction.
    pub fn interaction(at: DateTime<Utc>, conversion: Option<ConversionDetail>) -> Self {
        Self {
            expected_version: None,
            interactions: 1,
            at,
            conversion,
        }
    }

    pub fn expecting(mut self, version: u64) -> Self {
        self.expected_version = Some(version);
        self
    }

    pub fn unconditional(mut self) -> Self {
        self.expected_version = None;
        self
    }
}
