//! Application layer for ACTA.
//!
//! Use cases that orchestrate the core decision logic with the catalogue,
//! session store and analytics ports.

pub mod analytics_emitter;
pub mod catalogue_service;
pub mod render_usecase;
pub mod session_tracker;

pub use analytics_emitter::AnalyticsEmitter;
pub use catalogue_service::{CatalogueService, NewInstance, NewTemplate};
pub use render_usecase::{InteractionOutcome, NextAction, RenderContext, RenderUseCase};
pub use session_tracker::{RecordedInteraction, SessionTracker};
