//! Render and interaction use cases.
//!
//! This module provides the `RenderUseCase` which ties the catalogue, the
//! session tracker, the personalization engine and the analytics emitter
//! together for the two request-path operations.

use crate::analytics_emitter::AnalyticsEmitter;
use crate::session_tracker::{RecordedInteraction, SessionTracker};
use acta_core::PersonalizationEngine;
use acta_core::analytics::AnalyticsEventType;
use acta_core::capability::DeviceSignals;
use acta_core::compose::{Adaptation, RenderConfig};
use acta_core::emotion::{BehaviorSignals, EmotionDimension};
use acta_core::error::Result;
use acta_core::persona::UserContext;
use acta_core::session::{InteractionData, InteractionKind, Session, SessionKey};
use acta_core::template::{
    InstanceRepository, RenderInstance, RenderTemplate, TemplateRepository,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Session interactions after which an unconverted visitor is nudged
/// towards the CTA.
pub const HIGH_ENGAGEMENT_INTERACTIONS: u64 = 5;

/// Per-request inputs shared by render and interaction calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    pub session_id: String,
    pub device: DeviceSignals,
    pub behavior: BehaviorSignals,
    pub user: UserContext,
}

/// Follow-up the client should take after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    ShowConfirmation,
    ContinueExperience,
    OfferAssistance,
    OfferIncentive,
    HighlightCta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOutcome {
    pub adaptations: Vec<Adaptation>,
    pub is_conversion: bool,
    pub next_actions: Vec<NextAction>,
    pub session: Session,
}

/// Use case for the render and interaction request paths.
///
/// Holds only shared handles; one instance serves any number of
/// concurrent requests.
///
/// # Errors
///
/// Only `NotFound` (unknown instance or template) is expected to reach
/// callers. Analytics failures never do, and session write races are
/// resolved by the tracker.
pub struct RenderUseCase {
    instances: Arc<dyn InstanceRepository>,
    templates: Arc<dyn TemplateRepository>,
    sessions: SessionTracker,
    analytics: AnalyticsEmitter,
    engine: PersonalizationEngine,
}

impl RenderUseCase {
    pub fn new(
        instances: Arc<dyn InstanceRepository>,
        templates: Arc<dyn TemplateRepository>,
        sessions: SessionTracker,
        analytics: AnalyticsEmitter,
    ) -> Self {
        Self {
            instances,
            templates,
            sessions,
            analytics,
            engine: PersonalizationEngine::new(),
        }
    }

    /// Waits for analytics emissions scheduled so far; used at shutdown.
    pub async fn flush_analytics(&self) {
        self.analytics.flush().await;
    }

    async fn load(&self, instance_id: &str) -> Result<(RenderInstance, RenderTemplate)> {
        let instance = self.instances.get_instance(instance_id).await?;
        let template = self.templates.get_template(&instance.template_id).await?;
        Ok((instance, template))
    }

    /// Produces the adapted render configuration for one instance view.
    ///
    /// Opens the session when it does not exist yet and emits an
    /// impression event.
    pub async fn render_instance(
        &self,
        instance_id: &str,
        context: &RenderContext,
    ) -> Result<RenderConfig> {
        let (instance, template) = self.load(instance_id).await?;

        let key = SessionKey::new(instance_id, &context.session_id);
        let interaction_count = match self.sessions.open(&key).await {
            Ok(session) => session.interaction_count,
            Err(e) => {
                tracing::warn!(
                    target: "acta::session",
                    instance_id,
                    session_id = %context.session_id,
                    "Failed to open session, rendering without history: {}",
                    e
                );
                0
            }
        };

        let decision = self.engine.decide(
            &template,
            &context.device,
            &context.behavior,
            &context.user,
            interaction_count,
        );
        let config = self.engine.compose(&decision, &template, &instance);

        tracing::info!(
            target: "acta::render",
            instance_id,
            session_id = %context.session_id,
            pipeline = %config.pipeline.primary,
            performance_tier = %decision.capability.performance_tier,
            dominant_emotion = %config.emotion.dominant,
            targeting_matched = config.targeting_matched,
            warnings = config.warnings.len(),
            "Rendered instance"
        );
        for warning in &config.warnings {
            tracing::warn!(target: "acta::render", instance_id, "{}", warning);
        }

        self.analytics.emit(
            instance_id,
            &context.session_id,
            AnalyticsEventType::Impression,
            json!({
                "template_id": config.template_id,
                "category": config.category,
                "pipeline": config.pipeline.primary,
                "performance_tier": decision.capability.performance_tier,
                "dominant_emotion": config.emotion.dominant,
                "targeting_matched": config.targeting_matched,
            }),
        );

        Ok(config)
    }

    /// Records an interaction and returns the real-time adaptations.
    pub async fn handle_interaction(
        &self,
        instance_id: &str,
        interaction_type: &str,
        data: InteractionData,
        context: &RenderContext,
    ) -> Result<InteractionOutcome> {
        let (_, template) = self.load(instance_id).await?;

        let kind = InteractionKind::parse(interaction_type);
        let key = SessionKey::new(instance_id, &context.session_id);
        let recorded = self.sessions.record(&key, &kind, &data).await?;

        let decision = self.engine.decide(
            &template,
            &context.device,
            &context.behavior,
            &context.user,
            recorded.session.interaction_count,
        );
        let adaptations = self.engine.adaptations(&decision).adaptations();
        let next_actions = next_actions(&recorded, decision.emotion.dominant);

        tracing::info!(
            target: "acta::render",
            instance_id,
            session_id = %context.session_id,
            interaction_type = %kind,
            is_conversion = recorded.is_conversion,
            interaction_count = recorded.session.interaction_count,
            dominant_emotion = %decision.emotion.dominant,
            "Handled interaction"
        );

        self.analytics.emit(
            instance_id,
            &context.session_id,
            AnalyticsEventType::Interaction,
            json!({
                "interaction_type": kind,
                "interaction_count": recorded.session.interaction_count,
                "dominant_emotion": decision.emotion.dominant,
                "data": &data,
            }),
        );
        if recorded.is_conversion {
            self.analytics.emit(
                instance_id,
                &context.session_id,
                AnalyticsEventType::Conversion,
                json!({
                    "interaction_type": kind,
                    "conversion_value": data.conversion_value,
                    "interaction_count": recorded.session.interaction_count,
                }),
            );
        }

        Ok(InteractionOutcome {
            adaptations,
            is_conversion: recorded.is_conversion,
            next_actions,
            session: recorded.session,
        })
    }
}

/// Chooses follow-up actions for an interaction.
///
/// A converting event is confirmed; a session that converted earlier just
/// continues. Otherwise the dominant emotion picks the action, and a long
/// unconverted session additionally highlights the CTA.
pub fn next_actions(
    recorded: &RecordedInteraction,
    dominant: EmotionDimension,
) -> Vec<NextAction> {
    if recorded.is_conversion {
        return vec![NextAction::ShowConfirmation];
    }
    if recorded.session.is_converted {
        return vec![NextAction::ContinueExperience];
    }

    let mut actions = vec![match dominant {
        EmotionDimension::Confusion => NextAction::OfferAssistance,
        EmotionDimension::Hesitation => NextAction::OfferIncentive,
        EmotionDimension::Urgency | EmotionDimension::Excitement => NextAction::HighlightCta,
        EmotionDimension::Interest => NextAction::ContinueExperience,
    }];
    if recorded.session.interaction_count >= HIGH_ENGAGEMENT_INTERACTIONS
        && !actions.contains(&NextAction::HighlightCta)
    {
        actions.push(NextAction::HighlightCta);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn recorded(count: u64, is_converted: bool, is_conversion: bool) -> RecordedInteraction {
        let mut session = Session::new(
            &SessionKey::new("inst", "sess"),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        );
        session.interaction_count = count;
        session.is_converted = is_converted;
        RecordedInteraction {
            session,
            is_conversion,
        }
    }

    #[test]
    fn test_conversion_shows_confirmation() {
        assert_eq!(
            next_actions(&recorded(1, true, true), EmotionDimension::Confusion),
            vec![NextAction::ShowConfirmation]
        );
    }

    #[test]
    fn test_after_conversion_continue() {
        assert_eq!(
            next_actions(&recorded(9, true, false), EmotionDimension::Hesitation),
            vec![NextAction::ContinueExperience]
        );
    }

    #[test]
    fn test_emotion_driven_actions() {
        let cases = [
            (EmotionDimension::Confusion, NextAction::OfferAssistance),
            (EmotionDimension::Hesitation, NextAction::OfferIncentive),
            (EmotionDimension::Urgency, NextAction::HighlightCta),
            (EmotionDimension::Excitement, NextAction::HighlightCta),
            (EmotionDimension::Interest, NextAction::ContinueExperience),
        ];
        for (dominant, expected) in cases {
            assert_eq!(next_actions(&recorded(1, false, false), dominant), vec![expected]);
        }
    }

    #[test]
    fn test_engaged_unconverted_session_highlights_cta() {
        assert_eq!(
            next_actions(&recorded(5, false, false), EmotionDimension::Confusion),
            vec![NextAction::OfferAssistance, NextAction::HighlightCta]
        );
        assert_eq!(
            next_actions(&recorded(5, false, false), EmotionDimension::Urgency),
            vec![NextAction::HighlightCta]
        );
    }
}
