//! Persona domain module.
//!
//! A persona vector is the ephemeral composite of device, behavior and
//! context signals the composer personalizes against.
//!
//! # Module Structure
//!
//! - `model`: Behavior/context profiles and `PersonaVector`
//! - `builder`: Derivation of the profiles from raw signals

mod builder;
mod model;

// Re-export public API
pub use builder::{build_persona, derive_behavior, derive_context};
pub use model::{
    BehaviorProfile, ContextProfile, EngagementLevel, InteractionStyle, JourneyStage,
    PersonaVector, PreferredPace, TimeOfDay, TrafficSource, UserContext,
};
