//! Session domain module.
//!
//! This module contains the per-(instance, session) interaction record,
//! its monotone merge rules and the repository port it is stored through.
//!
//! # Module Structure
//!
//! - `model`: `Session`, `SessionPatch` and the merge rule
//! - `interaction`: Interaction kinds and conversion detection
//! - `repository`: Repository trait for session storage

mod interaction;
mod model;
mod repository;

// Re-export public API
pub use interaction::{InteractionData, InteractionKind, is_conversion_event};
pub use model::{ConversionDetail, Session, SessionKey, SessionPatch, SessionState};
pub use repository::SessionRepository;
