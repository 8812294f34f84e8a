//! Emotion scoring.

use super::model::{BehaviorSignals, ClickPattern, EmotionScores, EmotionState, ScrollPattern};

const INTEREST_DWELL_SCALE_MS: f64 = 30_000.0;
const STALLED_DWELL_MS: u64 = 60_000;
const STALLED_SPEED: f64 = 0.2;
/// Ceiling on the dwell term of interest while the session is stalled.
const STALLED_INTEREST_CAP: f64 = 0.5;

/// Stateless scorer from behavior telemetry to an [`EmotionState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionEngine;

impl EmotionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn infer(&self, signals: &BehaviorSignals) -> EmotionState {
        let scores = Self::score(signals);
        let state = EmotionState::from_scores(scores);
        tracing::debug!(
            target: "acta::render",
            dominant = %state.dominant,
            confidence = state.confidence,
            "Inferred emotion state"
        );
        state
    }

    fn score(signals: &BehaviorSignals) -> EmotionScores {
        let speed = signals.speed();
        let stalled = signals.dwell_time_ms > STALLED_DWELL_MS && speed < STALLED_SPEED;

        // Idle dwell reads as hesitation rather than interest.
        let mut dwell_term = signals.dwell_time_ms as f64 / INTEREST_DWELL_SCALE_MS;
        if stalled {
            dwell_term = dwell_term.min(STALLED_INTEREST_CAP);
        }
        let speed_bonus = if speed > 0.5 { 0.3 } else { 0.0 };

        let urgency = if signals.scroll_pattern == ScrollPattern::Fast {
            0.8
        } else if signals.click_pattern == ClickPattern::Rapid {
            0.7
        } else {
            0.3
        };

        let excitement = if speed > 0.8 && signals.scroll_pattern == ScrollPattern::Engaged {
            0.9
        } else {
            0.3
        };

        EmotionScores {
            interest: (dwell_term + speed_bonus).clamp(0.0, 1.0),
            urgency,
            hesitation: if stalled { 0.8 } else { 0.2 },
            excitement,
            confusion: if signals.backtrack_count > 3 { 0.7 } else { 0.1 },
        }
    }
}
