//! Composition output model.

use crate::emotion::EmotionState;
use crate::persona::PersonaVector;
use crate::pipeline::PipelineSelection;
use crate::template::{AssetQuality, Category, CategoryConfig, EngineKind};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pace {
    #[default]
    Maintain,
    Accelerate,
    Slow,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CtaStyle {
    #[default]
    Standard,
    Subtle,
    Prominent,
    Reassuring,
    Energetic,
    Clear,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DetailLevel {
    Full,
    #[default]
    Standard,
    Reduced,
    Simplified,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InteractionHint {
    HighlightKeyPoints,
    EnableFreeExploration,
    ShowDetailPanels,
    GuidedTour,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RenderQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySettings {
    pub level: RenderQuality,
    pub shadows: bool,
    pub texture_resolution: u32,
    pub antialiasing: bool,
    pub target_fps: u32,
}

/// One composition layer. `Some` fields override earlier layers; hints
/// accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationPatch {
    pub pace: Option<Pace>,
    pub cta_style: Option<CtaStyle>,
    pub detail: Option<DetailLevel>,
    pub hints: Vec<InteractionHint>,
}

impl AdaptationPatch {
    /// Layers `later` on top of `self`.
    pub fn merge(mut self, later: AdaptationPatch) -> AdaptationPatch {
        self.pace = later.pace.or(self.pace);
        self.cta_style = later.cta_style.or(self.cta_style);
        self.detail = later.detail.or(self.detail);
        for hint in later.hints {
            if !self.hints.contains(&hint) {
                self.hints.push(hint);
            }
        }
        self
    }

    /// Flattens the patch into a list of individual adaptations.
    pub fn adaptations(&self) -> Vec<Adaptation> {
        let mut out = Vec::new();
        if let Some(pace) = self.pace {
            out.push(Adaptation::Pace(pace));
        }
        if let Some(style) = self.cta_style {
            out.push(Adaptation::CtaStyle(style));
        }
        if let Some(detail) = self.detail {
            out.push(Adaptation::Detail(detail));
        }
        out.extend(self.hints.iter().copied().map(Adaptation::Hint));
        out
    }
}

/// A single real-time change pushed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Adaptation {
    Pace(Pace),
    CtaStyle(CtaStyle),
    Detail(DetailLevel),
    Hint(InteractionHint),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAsset {
    pub asset_id: String,
    pub quality: AssetQuality,
    pub size_kb: u32,
    pub uri: String,
    /// True when a lower quality than the tier allows was used
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextVariants {
    pub headline: String,
    pub cta_label: String,
    pub supporting_text: Option<String>,
}

/// The adapted configuration returned to the caller of a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub instance_id: String,
    pub template_id: String,
    pub category: Category,
    pub engine_kind: EngineKind,
    pub pipeline: PipelineSelection,
    pub quality: QualitySettings,
    pub pace: Pace,
    pub detail: DetailLevel,
    pub cta_style: CtaStyle,
    pub hints: Vec<InteractionHint>,
    pub assets: Vec<SelectedAsset>,
    pub text: TextVariants,
    pub scene: CategoryConfig,
    pub emotion: EmotionState,
    pub persona: PersonaVector,
    pub targeting_matched: bool,
    pub warnings: Vec<String>,
}
