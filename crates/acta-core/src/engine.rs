//! The personalization engine service object.

use crate::capability::{CapabilityProfile, DeviceSignals, classify};
use crate::compose::{AdaptationPatch, ComposeInput, Composer, RenderConfig};
use crate::emotion::{BehaviorSignals, EmotionEngine, EmotionState};
use crate::persona::{PersonaVector, UserContext, build_persona};
use crate::pipeline::{PipelineSelection, PipelineSelector};
use crate::template::{RenderInstance, RenderTemplate};

/// Bundles the stateless decision components.
///
/// Construct once at startup and share by reference (or `Arc`); it holds
/// nothing but its static rule tables, so concurrent use needs no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalizationEngine {
    selector: PipelineSelector,
    emotion: EmotionEngine,
    composer: Composer,
}

/// Everything the engine decided for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub capability: CapabilityProfile,
    pub pipeline: PipelineSelection,
    pub emotion: EmotionState,
    pub persona: PersonaVector,
}

impl PersonalizationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, device: &DeviceSignals) -> CapabilityProfile {
        classify(device)
    }

    pub fn decide(
        &self,
        template: &RenderTemplate,
        device: &DeviceSignals,
        behavior: &BehaviorSignals,
        user: &UserContext,
        interaction_count: u64,
    ) -> Decision {
        let capability = classify(device);
        let pipeline = self
            .selector
            .select(&capability, template.engine_kind, template.category());
        let emotion = self.emotion.infer(behavior);
        let persona = build_persona(capability, behavior, interaction_count, user);
        Decision {
            capability,
            pipeline,
            emotion,
            persona,
        }
    }

    pub fn compose(
        &self,
        decision: &Decision,
        template: &RenderTemplate,
        instance: &RenderInstance,
    ) -> RenderConfig {
        self.composer.compose(&ComposeInput {
            persona: &decision.persona,
            emotion: &decision.emotion,
            template,
            instance,
            pipeline: &decision.pipeline,
        })
    }

    /// The real-time part of a composition (behavior and emotion layers).
    pub fn adaptations(&self, decision: &Decision) -> AdaptationPatch {
        self.composer
            .adaptive_layers(&decision.persona, &decision.emotion)
    }
}
