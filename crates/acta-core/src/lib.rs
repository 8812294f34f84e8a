//! Core domain for ACTA.
//!
//! This crate holds the pure decision logic of the adaptive CTA renderer:
//! capability classification, pipeline selection, emotion inference and
//! personalization composition, together with the session merge rules and
//! the port traits the outer layers implement. Nothing here performs I/O.

pub mod analytics;
pub mod capability;
pub mod clock;
pub mod compose;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod id;
pub mod persona;
pub mod pipeline;
pub mod session;
pub mod template;

// Re-export common types
pub use engine::{Decision, PersonalizationEngine};
pub use error::ActaError;
