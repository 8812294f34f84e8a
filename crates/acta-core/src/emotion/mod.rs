//! Emotion inference domain module.
//!
//! Scores one snapshot of behavioral telemetry into a fixed set of emotion
//! dimensions. Scoring is stateless: nothing is carried between snapshots.

mod engine;
mod model;

// Re-export public API
pub use engine::EmotionEngine;
pub use model::{
    BehaviorSignals, ClickPattern, EmotionDimension, EmotionScores, EmotionState, ScrollPattern,
};
