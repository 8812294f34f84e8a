use acta_application::{AnalyticsEmitter, NextAction, RenderContext, RenderUseCase, SessionTracker};
use acta_core::analytics::{AnalyticsEvent, AnalyticsEventType, AnalyticsSink};
use acta_core::capability::DeviceSignals;
use acta_core::clock::FixedClock;
use acta_core::compose::{Adaptation, CtaStyle, Pace};
use acta_core::config::{AnalyticsSettings, SessionSettings};
use acta_core::emotion::{BehaviorSignals, EmotionDimension};
use acta_core::error::{ActaError, Result};
use acta_core::id::SequentialIdGenerator;
use acta_core::pipeline::Pipeline;
use acta_core::session::{InteractionData, SessionKey, SessionRepository};
use acta_core::template::{
    AnchorKind, AssetManifest, AssetQuality, AssetVariant, CategoryConfig, EngineKind,
    InstanceConfig, InstanceStatus, Locomotion, RenderInstance, RenderTemplate, TargetingRules,
};
use acta_infrastructure::{InMemoryAnalyticsSink, InMemoryCatalogue, InMemorySessionRepository};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn variant(asset_id: &str, quality: AssetQuality, size_kb: u32) -> AssetVariant {
    AssetVariant {
        asset_id: asset_id.to_string(),
        quality,
        size_kb,
        uri: format!("/assets/{asset_id}-{quality}.glb"),
    }
}

fn catalogue() -> InMemoryCatalogue {
    let loft = RenderTemplate {
        id: "tpl-loft".to_string(),
        name: "Loft".to_string(),
        engine_kind: EngineKind::WebxrNative,
        config: CategoryConfig::VrWalkthrough {
            scene_asset: "loft".to_string(),
            waypoints: vec!["entrance".to_string()],
            locomotion: Locomotion::Teleport,
        },
        asset_manifest: AssetManifest(vec![
            variant("loft", AssetQuality::High, 12000),
            variant("loft", AssetQuality::Low, 900),
        ]),
    };
    let glasses = RenderTemplate {
        id: "tpl-glasses".to_string(),
        name: "Glasses".to_string(),
        engine_kind: EngineKind::ThreeJs,
        config: CategoryConfig::ArTryOn {
            model_asset: "frames".to_string(),
            anchor: AnchorKind::Face,
            scale: 1.0,
        },
        asset_manifest: AssetManifest(vec![variant("frames", AssetQuality::Low, 500)]),
    };
    let instance = |id: &str, template_id: &str| RenderInstance {
        id: id.to_string(),
        template_id: template_id.to_string(),
        targeting: TargetingRules::default(),
        custom: InstanceConfig::default(),
        status: InstanceStatus::Active,
    };
    InMemoryCatalogue::with_entries(
        vec![loft, glasses],
        vec![
            instance("loft-hero", "tpl-loft"),
            instance("glasses-hero", "tpl-glasses"),
            instance("orphan", "tpl-missing"),
        ],
    )
}

struct Harness {
    usecase: Arc<RenderUseCase>,
    sessions: Arc<InMemorySessionRepository>,
}

fn harness_with_sink(sink: Arc<dyn AnalyticsSink>) -> Harness {
    let catalogue = Arc::new(catalogue());
    let sessions = Arc::new(InMemorySessionRepository::new());
    let clock = Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    let tracker = SessionTracker::new(sessions.clone(), clock.clone(), SessionSettings::default());
    let emitter = AnalyticsEmitter::new(
        sink,
        Arc::new(SequentialIdGenerator::new("evt")),
        clock,
        AnalyticsSettings::default(),
    );
    Harness {
        usecase: Arc::new(RenderUseCase::new(
            catalogue.clone(),
            catalogue,
            tracker,
            emitter,
        )),
        sessions,
    }
}

fn context(session_id: &str, device: DeviceSignals) -> RenderContext {
    RenderContext {
        session_id: session_id.to_string(),
        device,
        ..Default::default()
    }
}

#[tokio::test]
async fn headset_renders_immersive_and_opens_session() {
    let sink = Arc::new(InMemoryAnalyticsSink::new());
    let harness = harness_with_sink(sink.clone());
    let device = DeviceSignals {
        graphics_tier: Some(2),
        immersive_supported: Some(true),
        device_memory_mb: Some(8192),
        platform: Some("headset".to_string()),
        ..Default::default()
    };

    let config = harness
        .usecase
        .render_instance("loft-hero", &context("s1", device))
        .await
        .unwrap();
    assert_eq!(config.pipeline.primary, Pipeline::Immersive);
    assert_eq!(config.instance_id, "loft-hero");

    let session = harness
        .sessions
        .get(&SessionKey::new("loft-hero", "s1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.interaction_count, 0);

    harness.usecase.flush_analytics().await;
    let events = sink.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, AnalyticsEventType::Impression);
    assert_eq!(events[0].payload["pipeline"], "immersive");
}

#[tokio::test]
async fn low_memory_mobile_falls_back_to_canvas() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let device = DeviceSignals {
        graphics_tier: Some(1),
        device_memory_mb: Some(1024),
        platform: Some("mobile".to_string()),
        ..Default::default()
    };

    let config = harness
        .usecase
        .render_instance("loft-hero", &context("s1", device))
        .await
        .unwrap();
    assert_eq!(config.pipeline.primary, Pipeline::MobileBasic);
    assert_eq!(config.pipeline.terminal(), Pipeline::CanvasFallback);
}

#[tokio::test]
async fn ar_content_terminates_in_static_image() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let config = harness
        .usecase
        .render_instance("glasses-hero", &context("s1", DeviceSignals::default()))
        .await
        .unwrap();
    assert_eq!(config.pipeline.primary, Pipeline::StaticImage);
    assert_eq!(config.pipeline.terminal(), Pipeline::StaticImage);
}

#[tokio::test]
async fn stalled_visitor_gets_slow_reassuring_adaptations() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let ctx = RenderContext {
        session_id: "s1".to_string(),
        behavior: BehaviorSignals {
            dwell_time_ms: 70_000,
            interaction_speed: 0.1,
            backtrack_count: 0,
            ..Default::default()
        },
        ..Default::default()
    };

    let outcome = harness
        .usecase
        .handle_interaction("loft-hero", "view", InteractionData::default(), &ctx)
        .await
        .unwrap();
    assert!(outcome.adaptations.contains(&Adaptation::Pace(Pace::Slow)));
    assert!(
        outcome
            .adaptations
            .contains(&Adaptation::CtaStyle(CtaStyle::Reassuring))
    );
    assert!(!outcome.is_conversion);
    assert_eq!(outcome.next_actions, vec![NextAction::OfferIncentive]);
    assert_eq!(outcome.session.interaction_count, 1);

    let render = harness
        .usecase
        .render_instance("loft-hero", &ctx)
        .await
        .unwrap();
    assert_eq!(render.emotion.dominant, EmotionDimension::Hesitation);
}

#[tokio::test]
async fn cta_click_always_converts() {
    let sink = Arc::new(InMemoryAnalyticsSink::new());
    let harness = harness_with_sink(sink.clone());
    let ctx = context("s1", DeviceSignals::default());

    let data = InteractionData {
        is_conversion: Some(false),
        conversion_value: Some(0.0),
        ..Default::default()
    };
    let outcome = harness
        .usecase
        .handle_interaction("loft-hero", "cta_click", data, &ctx)
        .await
        .unwrap();
    assert!(outcome.is_conversion);
    assert!(outcome.session.is_converted);
    assert_eq!(outcome.next_actions, vec![NextAction::ShowConfirmation]);

    // later non-converting events never reset the flag
    let later = harness
        .usecase
        .handle_interaction("loft-hero", "hover", InteractionData::default(), &ctx)
        .await
        .unwrap();
    assert!(!later.is_conversion);
    assert!(later.session.is_converted);
    assert_eq!(later.next_actions, vec![NextAction::ContinueExperience]);

    harness.usecase.flush_analytics().await;
    let events = sink.events().await;
    assert_eq!(events.len(), 3);
    let conversions = events
        .iter()
        .filter(|e| e.event_type == AnalyticsEventType::Conversion)
        .count();
    assert_eq!(conversions, 1);
}

#[tokio::test]
async fn payload_flag_converts_other_kinds() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let data = InteractionData {
        conversion_value: Some(25.0),
        ..Default::default()
    };
    let outcome = harness
        .usecase
        .handle_interaction("loft-hero", "spin", data, &context("s1", DeviceSignals::default()))
        .await
        .unwrap();
    assert!(outcome.is_conversion);
    assert_eq!(
        outcome.session.conversion_detail.unwrap().interaction_type,
        "spin"
    );
}

#[tokio::test]
async fn unknown_instance_or_template_is_not_found() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let ctx = context("s1", DeviceSignals::default());

    let err = harness
        .usecase
        .render_instance("missing", &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ActaError::NotFound { entity_type: "instance", .. }));

    let err = harness
        .usecase
        .handle_interaction("orphan", "view", InteractionData::default(), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ActaError::NotFound { entity_type: "template", .. }));
}

struct FailingSink;

#[async_trait]
impl AnalyticsSink for FailingSink {
    async fn emit(&self, _event: &AnalyticsEvent) -> Result<()> {
        Err(ActaError::analytics_sink("collector down"))
    }
}

#[tokio::test]
async fn analytics_failure_never_fails_the_request() {
    let harness = harness_with_sink(Arc::new(FailingSink));
    let ctx = context("s1", DeviceSignals::default());

    assert!(harness.usecase.render_instance("loft-hero", &ctx).await.is_ok());
    let outcome = harness
        .usecase
        .handle_interaction("loft-hero", "form_submit", InteractionData::default(), &ctx)
        .await
        .unwrap();
    assert!(outcome.is_conversion);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_interactions_are_not_lost() {
    let harness = harness_with_sink(Arc::new(InMemoryAnalyticsSink::new()));
    let ctx = Arc::new(context("busy", DeviceSignals::default()));

    let mut handles = Vec::new();
    for i in 0..64 {
        let usecase = Arc::clone(&harness.usecase);
        let ctx = Arc::clone(&ctx);
        let kind = if i == 17 { "purchase_intent" } else { "rotate" };
        handles.push(tokio::spawn(async move {
            usecase
                .handle_interaction("loft-hero", kind, InteractionData::default(), &ctx)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let session = harness
        .sessions
        .get(&SessionKey::new("loft-hero", "busy"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.interaction_count, 64);
    assert!(session.is_converted);
    assert_eq!(
        session.conversion_detail.unwrap().interaction_type,
        "purchase_intent"
    );
}
