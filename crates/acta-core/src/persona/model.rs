//! Persona domain model.

use crate::capability::CapabilityProfile;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EngagementLevel {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InteractionStyle {
    /// Skims quickly for key points
    Scanner,
    /// Digs around freely
    Explorer,
    /// Slow and thorough
    Deliberate,
    #[default]
    Casual,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PreferredPace {
    Fast,
    #[default]
    Moderate,
    Slow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorProfile {
    pub engagement: EngagementLevel,
    pub style: InteractionStyle,
    pub pace: PreferredPace,
    /// Likelihood estimate in [0, 1]
    pub conversion_readiness: f64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    #[default]
    Afternoon,
    Evening,
    Night,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrafficSource {
    #[default]
    Direct,
    Search,
    Social,
    Email,
    Paid,
    Referral,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum JourneyStage {
    #[default]
    Awareness,
    Consideration,
    Decision,
    Retention,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextProfile {
    pub time_of_day: TimeOfDay,
    pub traffic_source: TrafficSource,
    pub journey_stage: JourneyStage,
}

/// Caller-supplied context about the visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    /// Hour of day in the visitor's timezone (0-23)
    pub local_hour: Option<u8>,
    /// Explicit traffic source label, e.g. "paid" or "email"
    pub traffic_source: Option<String>,
    /// Referrer URL, used when no explicit source is given
    pub referrer: Option<String>,
    pub journey_stage: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaVector {
    pub capability: CapabilityProfile,
    pub behavior: BehaviorProfile,
    pub context: ContextProfile,
}
