//! Pipeline domain model.

use crate::capability::{CapabilityProfile, GraphicsTier, PerformanceTier, PlatformClass};
use crate::template::EngineKind;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Memory above which an advanced-graphics client gets the enhanced pipeline.
pub(crate) const ENHANCED_MEMORY_THRESHOLD_MB: u32 = 4096;

/// A named rendering strategy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pipeline {
    Immersive,
    Enhanced,
    Standard,
    MobileBasic,
    DesktopBasic,
    CanvasFallback,
    StaticImage,
}

impl Pipeline {
    pub fn requirements(self) -> PipelineRequirements {
        match self {
            Pipeline::Immersive => PipelineRequirements {
                min_performance: Some(PerformanceTier::High),
                requires_vr: true,
                ..Default::default()
            },
            Pipeline::Enhanced => PipelineRequirements {
                min_graphics: Some(GraphicsTier::Advanced),
                min_memory_mb: Some(ENHANCED_MEMORY_THRESHOLD_MB + 1),
                ..Default::default()
            },
            Pipeline::Standard => PipelineRequirements {
                min_graphics: Some(GraphicsTier::Advanced),
                ..Default::default()
            },
            Pipeline::MobileBasic => PipelineRequirements {
                min_graphics: Some(GraphicsTier::Basic),
                platform: Some(PlatformClass::Mobile),
                ..Default::default()
            },
            Pipeline::DesktopBasic => PipelineRequirements {
                min_graphics: Some(GraphicsTier::Basic),
                ..Default::default()
            },
            Pipeline::CanvasFallback | Pipeline::StaticImage => PipelineRequirements::default(),
        }
    }
}

/// Minimum capability a pipeline needs. The default value requires nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRequirements {
    pub min_performance: Option<PerformanceTier>,
    pub min_graphics: Option<GraphicsTier>,
    pub min_memory_mb: Option<u32>,
    pub platform: Option<PlatformClass>,
    pub requires_vr: bool,
}

impl PipelineRequirements {
    pub fn is_empty(&self) -> bool {
        *self == PipelineRequirements::default()
    }

    pub fn is_satisfied_by(&self, profile: &CapabilityProfile) -> bool {
        self.min_performance
            .is_none_or(|min| profile.performance_tier >= min)
            && self.min_graphics.is_none_or(|min| profile.graphics_tier >= min)
            && self.min_memory_mb.is_none_or(|min| profile.memory_class_mb >= min)
            && self.platform.is_none_or(|p| profile.platform_class == p)
            && (!self.requires_vr || profile.immersive_support.supports_vr())
    }
}

/// Primary pipeline plus the ordered chain tried when it cannot run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineSelection {
    pub primary: Pipeline,
    pub fallback_chain: Vec<Pipeline>,
    pub engine_kind: EngineKind,
}

impl PipelineSelection {
    /// The last pipeline that can be tried. Always has empty requirements.
    pub fn terminal(&self) -> Pipeline {
        self.fallback_chain.last().copied().unwrap_or(self.primary)
    }

    /// Primary followed by the fallback chain.
    pub fn candidates(&self) -> impl Iterator<Item = Pipeline> + '_ {
        std::iter::once(self.primary).chain(self.fallback_chain.iter().copied())
    }

    /// First candidate the profile satisfies.
    pub fn resolve(&self, profile: &CapabilityProfile) -> Pipeline {
        self.candidates()
            .find(|p| p.requirements().is_satisfied_by(profile))
            .unwrap_or_else(|| self.terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_baselines_have_empty_requirements() {
        assert!(Pipeline::CanvasFallback.requirements().is_empty());
        assert!(Pipeline::StaticImage.requirements().is_empty());
        let non_empty = Pipeline::iter()
            .filter(|p| !p.requirements().is_empty())
            .count();
        assert_eq!(non_empty, 5);
    }

    #[test]
    fn test_empty_requirements_always_satisfied() {
        let profile = CapabilityProfile::conservative();
        assert!(PipelineRequirements::default().is_satisfied_by(&profile));
        assert!(!Pipeline::DesktopBasic.requirements().is_satisfied_by(&profile));
    }

    #[test]
    fn test_resolve_walks_chain() {
        let selection = PipelineSelection {
            primary: Pipeline::Enhanced,
            fallback_chain: vec![
                Pipeline::Standard,
                Pipeline::DesktopBasic,
                Pipeline::CanvasFallback,
            ],
            engine_kind: EngineKind::ThreeJs,
        };
        let mut profile = CapabilityProfile::conservative();
        profile.graphics_tier = GraphicsTier::Basic;
        assert_eq!(selection.resolve(&profile), Pipeline::DesktopBasic);
        assert_eq!(
            selection.resolve(&CapabilityProfile::conservative()),
            Pipeline::CanvasFallback
        );
    }
}
