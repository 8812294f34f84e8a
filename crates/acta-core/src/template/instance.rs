//! Render instance domain model.

use super::model::CategoryOverrides;
use crate::capability::{PerformanceTier, PlatformClass};
use crate::persona::{PersonaVector, TrafficSource};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstanceStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Archived,
}

/// Audience rules for a placement. Empty lists mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingRules {
    pub platforms: Vec<PlatformClass>,
    pub min_performance: Option<PerformanceTier>,
    pub traffic_sources: Vec<TrafficSource>,
}

impl TargetingRules {
    pub fn matches(&self, persona: &PersonaVector) -> bool {
        let platform_ok =
            self.platforms.is_empty() || self.platforms.contains(&persona.capability.platform_class);
        let performance_ok = self
            .min_performance
            .is_none_or(|min| persona.capability.performance_tier >= min);
        let source_ok = self.traffic_sources.is_empty()
            || self.traffic_sources.contains(&persona.context.traffic_source);
        platform_ok && performance_ok && source_ok
    }
}

/// Copy and scene overrides carried by an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub headline: Option<String>,
    pub cta_label: Option<String>,
    pub overrides: CategoryOverrides,
}

/// One deployed placement of a template.
///
/// Many sessions may render the same instance concurrently; the instance
/// itself is read-only on the render path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstance {
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub targeting: TargetingRules,
    #[serde(default)]
    pub custom: InstanceConfig,
    #[serde(default)]
    pub status: InstanceStatus,
}
