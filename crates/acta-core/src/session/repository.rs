//! Session repository trait.
//!
//! Defines the interface for session storage operations.

use super::model::{Session, SessionKey, SessionPatch};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for session records.
///
/// # Implementation Notes
///
/// Implementations must apply `upsert` atomically per key, in arrival
/// order, using [`Session::apply`] for the merge. A conditional patch whose
/// `expected_version` differs from the stored version must be rejected with
/// `ActaError::SessionConflict` and leave the record untouched.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: Session found
    /// - `Ok(None)`: Session not found (never created, or reaped)
    /// - `Err(_)`: Error occurred during retrieval
    async fn get(&self, key: &SessionKey) -> Result<Option<Session>>;

    /// Applies a patch, creating the session first when missing.
    ///
    /// # Returns
    ///
    /// - `Ok(Session)`: The session after the patch
    /// - `Err(ActaError::SessionConflict)`: Conditional patch lost a race
    async fn upsert(&self, key: &SessionKey, patch: SessionPatch) -> Result<Session>;
}
