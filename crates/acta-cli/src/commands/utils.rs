use acta_application::{AnalyticsEmitter, RenderContext, RenderUseCase, SessionTracker};
use acta_core::analytics::AnalyticsSink;
use acta_core::clock::SystemClock;
use acta_core::config::EngineConfig;
use acta_core::id::{IdGenerator, UuidIdGenerator};
use acta_infrastructure::{
    ConfigService, InMemorySessionRepository, JsonlAnalyticsSink, TracingAnalyticsSink,
    load_catalogue,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    service.get_config().context("Failed to load engine config")
}

/// Reads a signals file (`{ "device": .., "behavior": .., "user": .. }`).
///
/// Every section is optional; no file at all means "nothing reported".
pub fn load_context(signals: Option<&Path>, session: Option<String>) -> Result<RenderContext> {
    let mut context = match signals {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read signals file {:?}", path))?;
            serde_json::from_str::<RenderContext>(&content)
                .with_context(|| format!("Failed to parse signals file {:?}", path))?
        }
        None => RenderContext::default(),
    };
    context.session_id = session.unwrap_or_else(|| UuidIdGenerator.next_id());
    Ok(context)
}

/// Wires a render use case over a catalogue file and an in-process
/// session store.
pub fn build_usecase(
    config: &EngineConfig,
    catalogue: &Path,
    events: Option<PathBuf>,
) -> Result<RenderUseCase> {
    let catalogue = Arc::new(
        load_catalogue(catalogue)
            .with_context(|| format!("Failed to load catalogue {:?}", catalogue))?
            .into_memory(),
    );
    let clock = Arc::new(SystemClock);
    let sink: Arc<dyn AnalyticsSink> = match events {
        Some(path) => Arc::new(JsonlAnalyticsSink::new(path)),
        None => Arc::new(TracingAnalyticsSink),
    };

    let tracker = SessionTracker::new(
        Arc::new(InMemorySessionRepository::new()),
        clock.clone(),
        config.session.clone(),
    );
    let emitter = AnalyticsEmitter::new(
        sink,
        Arc::new(UuidIdGenerator),
        clock,
        config.analytics.clone(),
    );
    Ok(RenderUseCase::new(
        catalogue.clone(),
        catalogue,
        tracker,
        emitter,
    ))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use acta_core::capability::PlatformClass;
    use tempfile::TempDir;

    #[test]
    fn test_load_context_reads_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("signals.json");
        fs::write(
            &path,
            r#"{
                "device": {"graphics_tier": 1, "platform": "android", "device_memory_mb": 2048},
                "behavior": {"dwell_time_ms": 12000, "scroll_pattern": "engaged"},
                "user": {"traffic_source": "email"}
            }"#,
        )
        .unwrap();

        let context = load_context(Some(&path), Some("sess-1".to_string())).unwrap();
        assert_eq!(context.session_id, "sess-1");
        assert_eq!(context.device.graphics_tier, Some(1));
        assert_eq!(context.behavior.dwell_time_ms, 12000);
        assert_eq!(context.user.traffic_source.as_deref(), Some("email"));
        assert_eq!(
            acta_core::capability::classify(&context.device).platform_class,
            PlatformClass::Mobile
        );
    }

    #[test]
    fn test_missing_signals_get_fresh_session() {
        let context = load_context(None, None).unwrap();
        assert!(!context.session_id.is_empty());
        assert_eq!(context.device, Default::default());
    }

    #[test]
    fn test_demo_catalogue_wires_up() {
        let catalogue = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/catalogue.toml");
        assert!(build_usecase(&EngineConfig::default(), &catalogue, None).is_ok());
    }
}
