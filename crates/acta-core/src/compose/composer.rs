//! Personalization composer.

use super::assets::select_assets;
use super::layers::{behavior_layer, device_layer, emotion_layer};
use super::model::{AdaptationPatch, RenderConfig};
use super::text::text_variants;
use crate::emotion::EmotionState;
use crate::persona::PersonaVector;
use crate::pipeline::PipelineSelection;
use crate::template::{RenderInstance, RenderTemplate};

/// Everything a composition depends on.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    pub persona: &'a PersonaVector,
    pub emotion: &'a EmotionState,
    pub template: &'a RenderTemplate,
    pub instance: &'a RenderInstance,
    pub pipeline: &'a PipelineSelection,
}

/// Builds a [`RenderConfig`] from a [`ComposeInput`].
///
/// Pure: identical inputs always produce an identical config.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composer;

impl Composer {
    pub fn new() -> Self {
        Self
    }

    /// The behavior and emotion layers merged, without device defaults.
    ///
    /// This is what changes in real time as a session's telemetry moves.
    pub fn adaptive_layers(
        &self,
        persona: &PersonaVector,
        emotion: &EmotionState,
    ) -> AdaptationPatch {
        behavior_layer(&persona.behavior).merge(emotion_layer(emotion.dominant))
    }

    pub fn compose(&self, input: &ComposeInput<'_>) -> RenderConfig {
        let ComposeInput {
            persona,
            emotion,
            template,
            instance,
            pipeline,
        } = *input;

        let (quality, device_patch) = device_layer(&persona.capability);
        let patch = device_patch.merge(self.adaptive_layers(persona, emotion));

        let mut warnings = Vec::new();

        let scene = match template.config.with_overrides(&instance.custom.overrides) {
            Some(scene) => scene,
            None => {
                warnings.push(format!(
                    "overrides for instance '{}' ignored: category mismatch",
                    instance.id
                ));
                template.config.clone()
            }
        };

        let (assets, recovered) =
            select_assets(&template.asset_manifest, persona.capability.performance_tier);
        warnings.extend(recovered.iter().map(ToString::to_string));

        let text = text_variants(
            template.category(),
            &instance.custom,
            persona.context.journey_stage,
            emotion.dominant,
        );

        RenderConfig {
            instance_id: instance.id.clone(),
            template_id: template.id.clone(),
            category: template.category(),
            engine_kind: template.engine_kind,
            pipeline: pipeline.clone(),
            quality,
            pace: patch.pace.unwrap_or_default(),
            detail: patch.detail.unwrap_or_default(),
            cta_style: patch.cta_style.unwrap_or_default(),
            hints: patch.hints,
            assets,
            text,
            scene,
            emotion: *emotion,
            persona: *persona,
            targeting_matched: instance.targeting.matches(persona),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{DeviceSignals, classify};
    use crate::compose::{CtaStyle, DetailLevel, InteractionHint, Pace};
    use crate::emotion::{BehaviorSignals, EmotionEngine};
    use crate::persona::{UserContext, build_persona};
    use crate::pipeline::PipelineSelector;
    use crate::template::{
        AssetManifest, AssetQuality, AssetVariant, CategoryConfig, CategoryOverrides, EngineKind,
        InstanceConfig,
    };

    fn template() -> RenderTemplate {
        RenderTemplate {
            id: "tpl-1".to_string(),
            name: "Sneaker".to_string(),
            engine_kind: EngineKind::ThreeJs,
            config: CategoryConfig::ThreeDProduct {
                model_asset: "sneaker".to_string(),
                auto_rotate: true,
                zoom_enabled: true,
                background: "#fff".to_string(),
            },
            asset_manifest: AssetManifest(vec![
                AssetVariant {
                    asset_id: "sneaker".to_string(),
                    quality: AssetQuality::Low,
                    size_kb: 400,
                    uri: "/sneaker-low.glb".to_string(),
                },
                AssetVariant {
                    asset_id: "sneaker".to_string(),
                    quality: AssetQuality::High,
                    size_kb: 8000,
                    uri: "/sneaker-high.glb".to_string(),
                },
            ]),
        }
    }

    fn instance() -> RenderInstance {
        RenderInstance {
            id: "inst-1".to_string(),
            template_id: "tpl-1".to_string(),
            targeting: Default::default(),
            custom: InstanceConfig {
                overrides: CategoryOverrides::ThreeDProduct {
                    auto_rotate: Some(false),
                    zoom_enabled: None,
                    background: None,
                },
                ..Default::default()
            },
            status: Default::default(),
        }
    }

    fn compose(device: DeviceSignals, behavior: BehaviorSignals) -> RenderConfig {
        let template = template();
        let instance = instance();
        let capability = classify(&device);
        let persona = build_persona(capability, &behavior, 0, &UserContext::default());
        let emotion = EmotionEngine::new().infer(&behavior);
        let pipeline =
            PipelineSelector::new().select(&capability, template.engine_kind, template.category());
        Composer::new().compose(&ComposeInput {
            persona: &persona,
            emotion: &emotion,
            template: &template,
            instance: &instance,
            pipeline: &pipeline,
        })
    }

    fn desktop_high() -> DeviceSignals {
        DeviceSignals {
            graphics_tier: Some(2),
            device_memory_mb: Some(8192),
            platform: Some("desktop".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_hesitation_overrides_behavior_pace() {
        let config = compose(
            desktop_high(),
            BehaviorSignals {
                dwell_time_ms: 70_000,
                interaction_speed: 0.1,
                ..Default::default()
            },
        );
        assert_eq!(config.pace, Pace::Slow);
        assert_eq!(config.cta_style, CtaStyle::Reassuring);
        assert_eq!(config.detail, DetailLevel::Full);
        assert_eq!(config.hints, vec![InteractionHint::ShowDetailPanels]);
    }

    #[test]
    fn test_confusion_simplifies_detail() {
        let config = compose(
            desktop_high(),
            BehaviorSignals {
                backtrack_count: 6,
                ..Default::default()
            },
        );
        assert_eq!(config.detail, DetailLevel::Simplified);
        assert_eq!(config.cta_style, CtaStyle::Clear);
    }

    #[test]
    fn test_overrides_and_assets_applied() {
        let config = compose(desktop_high(), BehaviorSignals::default());
        assert!(matches!(
            config.scene,
            CategoryConfig::ThreeDProduct { auto_rotate: false, .. }
        ));
        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.assets[0].quality, AssetQuality::High);
        assert!(config.warnings.is_empty());
        assert!(config.targeting_matched);
    }

    #[test]
    fn test_low_tier_gets_low_assets() {
        let config = compose(DeviceSignals::default(), BehaviorSignals::default());
        assert_eq!(config.assets[0].uri, "/sneaker-low.glb");
        assert_eq!(config.detail, DetailLevel::Reduced);
    }

    #[test]
    fn test_asset_fallback_recorded_once() {
        let mut template = template();
        template.asset_manifest.0.push(AssetVariant {
            asset_id: "env".to_string(),
            quality: AssetQuality::High,
            size_kb: 9000,
            uri: "/env-high.glb".to_string(),
        });
        let instance = instance();
        let behavior = BehaviorSignals::default();
        let capability = classify(&DeviceSignals::default());
        let persona = build_persona(capability, &behavior, 0, &UserContext::default());
        let emotion = EmotionEngine::new().infer(&behavior);
        let pipeline =
            PipelineSelector::new().select(&capability, template.engine_kind, template.category());

        let config = Composer::new().compose(&ComposeInput {
            persona: &persona,
            emotion: &emotion,
            template: &template,
            instance: &instance,
            pipeline: &pipeline,
        });

        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("'env'"));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let behavior = BehaviorSignals {
            dwell_time_ms: 12_000,
            interaction_speed: 0.55,
            ..Default::default()
        };
        assert_eq!(
            compose(desktop_high(), behavior),
            compose(desktop_high(), behavior)
        );
    }
}
