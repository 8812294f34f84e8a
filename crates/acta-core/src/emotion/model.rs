//! Emotion domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScrollPattern {
    #[default]
    Steady,
    Fast,
    Engaged,
    Erratic,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClickPattern {
    #[default]
    Normal,
    Rapid,
    Hesitant,
}

/// One snapshot of behavioral telemetry for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSignals {
    pub dwell_time_ms: u64,
    /// Normalized interaction speed in [0, 1]
    pub interaction_speed: f64,
    pub scroll_pattern: ScrollPattern,
    pub click_pattern: ClickPattern,
    pub backtrack_count: u32,
}

impl BehaviorSignals {
    /// Interaction speed clamped to [0, 1]; NaN reads as 0.
    pub fn speed(&self) -> f64 {
        if self.interaction_speed.is_nan() {
            0.0
        } else {
            self.interaction_speed.clamp(0.0, 1.0)
        }
    }
}

/// Emotion dimensions in tie-break priority order (highest first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmotionDimension {
    Interest,
    Urgency,
    Hesitation,
    Excitement,
    Confusion,
}

/// One score in [0, 1] per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub interest: f64,
    pub urgency: f64,
    pub hesitation: f64,
    pub excitement: f64,
    pub confusion: f64,
}

impl EmotionScores {
    pub fn get(&self, dimension: EmotionDimension) -> f64 {
        match dimension {
            EmotionDimension::Interest => self.interest,
            EmotionDimension::Urgency => self.urgency,
            EmotionDimension::Hesitation => self.hesitation,
            EmotionDimension::Excitement => self.excitement,
            EmotionDimension::Confusion => self.confusion,
        }
    }

    /// Dimensions with their scores, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionDimension, f64)> + '_ {
        EmotionDimension::iter().map(move |d| (d, self.get(d)))
    }

    /// Highest-scoring dimension; earlier dimensions win ties.
    pub fn dominant(&self) -> (EmotionDimension, f64) {
        let mut best = (EmotionDimension::Interest, self.interest);
        for (dimension, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (dimension, score);
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionState {
    pub scores: EmotionScores,
    pub dominant: EmotionDimension,
    /// Score of the dominant dimension
    pub confidence: f64,
}

impl EmotionState {
    pub fn from_scores(scores: EmotionScores) -> Self {
        let (dominant, confidence) = scores.dominant();
        Self {
            scores,
            dominant,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_tie_prefers_priority() {
        let scores = EmotionScores {
            interest: 0.3,
            urgency: 0.7,
            hesitation: 0.2,
            excitement: 0.3,
            confusion: 0.7,
        };
        assert_eq!(scores.dominant(), (EmotionDimension::Urgency, 0.7));
    }

    #[test]
    fn test_speed_clamped() {
        let mut signals = BehaviorSignals {
            interaction_speed: 3.0,
            ..Default::default()
        };
        assert_eq!(signals.speed(), 1.0);
        signals.interaction_speed = f64::NAN;
        assert_eq!(signals.speed(), 0.0);
    }
}
