//! Pipeline selection.

use super::model::{ENHANCED_MEMORY_THRESHOLD_MB, Pipeline, PipelineSelection};
use crate::capability::{CapabilityProfile, GraphicsTier, PerformanceTier, PlatformClass};
use crate::template::{Category, EngineKind};

/// Maps a capability profile to a primary pipeline and its fallback chain.
///
/// Holds no state beyond the static fallback table; identical inputs always
/// yield identical selections.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineSelector;

impl PipelineSelector {
    pub fn new() -> Self {
        Self
    }

    /// Selects the pipeline for a client rendering content of `category`
    /// authored for `engine_kind`.
    pub fn select(
        &self,
        profile: &CapabilityProfile,
        engine_kind: EngineKind,
        category: Category,
    ) -> PipelineSelection {
        let baseline = Self::baseline(category);
        let primary = match Self::cascade(profile) {
            Pipeline::CanvasFallback => baseline,
            other => other,
        };

        let mut fallback_chain: Vec<Pipeline> = Self::fallback_table(primary)
            .iter()
            .map(|p| match p {
                Pipeline::CanvasFallback => baseline,
                other => *other,
            })
            .collect();
        if primary != baseline && fallback_chain.last() != Some(&baseline) {
            fallback_chain.push(baseline);
        }

        tracing::debug!(
            target: "acta::render",
            primary = %primary,
            chain_len = fallback_chain.len(),
            engine = %engine_kind,
            "Selected rendering pipeline"
        );

        PipelineSelection {
            primary,
            fallback_chain,
            engine_kind,
        }
    }

    /// Ordered decision cascade; first match wins.
    fn cascade(profile: &CapabilityProfile) -> Pipeline {
        if profile.immersive_support.supports_vr()
            && profile.performance_tier == PerformanceTier::High
        {
            Pipeline::Immersive
        } else if profile.graphics_tier >= GraphicsTier::Advanced
            && profile.memory_class_mb > ENHANCED_MEMORY_THRESHOLD_MB
        {
            Pipeline::Enhanced
        } else if profile.graphics_tier >= GraphicsTier::Advanced {
            Pipeline::Standard
        } else if profile.graphics_tier >= GraphicsTier::Basic
            && profile.platform_class == PlatformClass::Mobile
        {
            Pipeline::MobileBasic
        } else if profile.graphics_tier >= GraphicsTier::Basic {
            Pipeline::DesktopBasic
        } else {
            Pipeline::CanvasFallback
        }
    }

    fn fallback_table(primary: Pipeline) -> &'static [Pipeline] {
        match primary {
            Pipeline::Immersive => &[
                Pipeline::Enhanced,
                Pipeline::Standard,
                Pipeline::DesktopBasic,
                Pipeline::CanvasFallback,
            ],
            Pipeline::Enhanced => &[
                Pipeline::Standard,
                Pipeline::DesktopBasic,
                Pipeline::CanvasFallback,
            ],
            Pipeline::Standard => &[Pipeline::DesktopBasic, Pipeline::CanvasFallback],
            Pipeline::MobileBasic | Pipeline::DesktopBasic => &[Pipeline::CanvasFallback],
            Pipeline::CanvasFallback | Pipeline::StaticImage => &[],
        }
    }

    fn baseline(category: Category) -> Pipeline {
        if category.has_canvas_rendition() {
            Pipeline::CanvasFallback
        } else {
            Pipeline::StaticImage
        }
    }
}
