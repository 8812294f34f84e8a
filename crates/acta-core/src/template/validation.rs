//! Creation-time validation of templates and instances.
//!
//! Render code assumes data that has passed through here.

use super::instance::RenderInstance;
use super::model::{CategoryConfig, RenderTemplate};
use crate::error::{ActaError, Result};
use std::collections::HashSet;

pub fn validate_template(template: &RenderTemplate) -> Result<()> {
    if template.name.trim().is_empty() {
        return Err(ActaError::validation("template", "name", "must not be empty"));
    }

    let mut seen = HashSet::new();
    for (index, variant) in template.asset_manifest.variants().iter().enumerate() {
        if variant.asset_id.trim().is_empty() {
            return Err(ActaError::validation(
                "template",
                format!("asset_manifest[{index}].asset_id"),
                "must not be empty",
            ));
        }
        if variant.size_kb == 0 {
            return Err(ActaError::validation(
                "template",
                format!("asset_manifest[{index}].size_kb"),
                "must be positive",
            ));
        }
        if !seen.insert((variant.asset_id.as_str(), variant.quality)) {
            return Err(ActaError::validation(
                "template",
                format!("asset_manifest[{index}]"),
                format!(
                    "duplicate variant '{}' at quality {}",
                    variant.asset_id, variant.quality
                ),
            ));
        }
    }

    for asset_id in template.config.referenced_assets() {
        if !template.asset_manifest.contains(asset_id) {
            return Err(ActaError::validation(
                "template",
                "config",
                format!("references asset '{asset_id}' missing from the manifest"),
            ));
        }
    }

    check_scene_values(&template.config, "template", "config")
}

/// Value rules shared by template configs and merged instance overrides.
fn check_scene_values(
    config: &CategoryConfig,
    entity_type: &'static str,
    prefix: &str,
) -> Result<()> {
    match config {
        CategoryConfig::Gamified { max_attempts, .. } if *max_attempts == 0 => {
            Err(ActaError::validation(
                entity_type,
                format!("{prefix}.max_attempts"),
                "must be at least 1",
            ))
        }
        CategoryConfig::ArTryOn { scale, .. } if !(*scale > 0.0) => Err(ActaError::validation(
            entity_type,
            format!("{prefix}.scale"),
            "must be a positive number",
        )),
        _ => Ok(()),
    }
}

/// Validates an instance against the template it deploys.
pub fn validate_instance(instance: &RenderInstance, template: &RenderTemplate) -> Result<()> {
    if instance.template_id != template.id {
        return Err(ActaError::validation(
            "instance",
            "template_id",
            format!(
                "'{}' does not match template '{}'",
                instance.template_id, template.id
            ),
        ));
    }

    if let Some(category) = instance.custom.overrides.category() {
        if category != template.category() {
            return Err(ActaError::validation(
                "instance",
                "custom.overrides",
                format!(
                    "overrides target {} but template is {}",
                    category,
                    template.category()
                ),
            ));
        }
    }

    match template.config.with_overrides(&instance.custom.overrides) {
        Some(merged) => check_scene_values(&merged, "instance", "custom.overrides")?,
        None => {
            return Err(ActaError::validation(
                "instance",
                "custom.overrides",
                format!("cannot be applied to a {} template", template.category()),
            ));
        }
    }

    if let Some(label) = &instance.custom.cta_label {
        if label.trim().is_empty() {
            return Err(ActaError::validation(
                "instance",
                "custom.cta_label",
                "must not be blank when set",
            ));
        }
    }

    Ok(())
}
