use super::utils::{load_context, print_json};
use acta_core::PersonalizationEngine;
use acta_core::pipeline::PipelineSelector;
use acta_core::template::{Category, EngineKind};
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use strum::IntoEnumIterator;

/// Prints the capability profile and, per category, the pipeline selection
/// a `three_js` template would get.
pub fn run(signals: Option<&Path>) -> Result<()> {
    let context = load_context(signals, None)?;
    let engine = PersonalizationEngine::new();
    let profile = engine.classify(&context.device);

    let selector = PipelineSelector::new();
    let selections: serde_json::Map<String, serde_json::Value> = Category::iter()
        .map(|category| -> Result<(String, serde_json::Value)> {
            let selection = selector.select(&profile, EngineKind::ThreeJs, category);
            Ok((category.to_string(), serde_json::to_value(selection)?))
        })
        .collect::<Result<_>>()?;

    print_json(&json!({
        "capability": profile,
        "selections": selections,
    }))
}
