//! Personalization composition module.
//!
//! Merges the capability, behavior and emotion signals into one immutable
//! [`RenderConfig`].
//!
//! # Module Structure
//!
//! - `model`: Output types and the layered `AdaptationPatch`
//! - `layers`: Device, behavior and emotion rule tables
//! - `assets`: Tier-bounded asset variant selection
//! - `text`: Copy variants
//! - `composer`: The composition entry point

mod assets;
mod composer;
mod layers;
mod model;
mod text;

// Re-export public API
pub use assets::{AssetCeiling, select_assets};
pub use composer::{ComposeInput, Composer};
pub use layers::{behavior_layer, device_layer, emotion_layer};
pub use model::{
    Adaptation, AdaptationPatch, CtaStyle, DetailLevel, InteractionHint, Pace, QualitySettings,
    RenderConfig, RenderQuality, SelectedAsset, TextVariants,
};
pub use text::text_variants;
