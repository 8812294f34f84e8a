//! Engine configuration model.
//!
//! Every field has a default so a partial (or absent) `config.toml` is
//! always usable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub analytics: AnalyticsSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    /// Upper bound on one sink call before it is abandoned
    pub emit_timeout_ms: u64,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            emit_timeout_ms: 250,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSettings {
    /// Conditional write attempts before falling back to an unconditional
    /// monotone merge
    pub max_update_attempts: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_update_attempts: 2,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}
