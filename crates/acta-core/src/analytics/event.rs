//! Analytics event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnalyticsEventType {
    Impression,
    Interaction,
    Conversion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_id: String,
    pub instance_id: String,
    pub session_id: String,
    pub event_type: AnalyticsEventType,
    pub timestamp: DateTime<Utc>,
    pub payload: Value,
}
