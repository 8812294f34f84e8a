//! TOML catalogue loader.
//!
//! A catalogue file lists templates and instances:
//!
//! ```toml
//! [[template]]
//! id = "tpl-sneaker"
//! name = "Sneaker viewer"
//! category = "3d_product"
//! engine_kind = "three_js"
//! [template.config]
//! model_asset = "sneaker"
//! # ...
//!
//! [[instance]]
//! id = "home-hero"
//! template_id = "tpl-sneaker"
//! ```
//!
//! Every entry passes creation-time validation before it reaches the
//! returned catalogue, so the render path never sees malformed data.

use crate::dto::{CATALOGUE_SCHEMA_VERSION, CatalogueDto};
use crate::memory_catalogue::InMemoryCatalogue;
use acta_core::error::{ActaError, Result};
use acta_core::template::{
    RenderInstance, RenderTemplate, validate_instance, validate_template,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Validated contents of a catalogue file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    pub templates: Vec<RenderTemplate>,
    pub instances: Vec<RenderInstance>,
}

impl Catalogue {
    pub fn into_memory(self) -> InMemoryCatalogue {
        InMemoryCatalogue::with_entries(self.templates, self.instances)
    }
}

/// Parses and validates catalogue TOML.
///
/// # Returns
///
/// - `Ok(Catalogue)`: All templates and instances are valid
/// - `Err(ActaError::Serialization)`: The content is not valid TOML
/// - `Err(ActaError::Validation)`: The first invalid entry found
pub fn parse_catalogue(content: &str) -> Result<Catalogue> {
    if content.trim().is_empty() {
        return Ok(Catalogue::default());
    }

    let root: CatalogueDto = toml::from_str(content)?;
    if !root.is_supported() {
        return Err(ActaError::validation(
            "catalogue",
            "version",
            format!(
                "unsupported schema version '{}' (expected {})",
                root.version, CATALOGUE_SCHEMA_VERSION
            ),
        ));
    }

    let mut templates = Vec::with_capacity(root.templates.len());
    let mut by_id: HashMap<String, usize> = HashMap::new();
    for dto in root.templates {
        let template = dto.into_domain()?;
        validate_template(&template)?;
        if by_id.insert(template.id.clone(), templates.len()).is_some() {
            return Err(ActaError::validation(
                "template",
                "id",
                format!("duplicate template id '{}'", template.id),
            ));
        }
        templates.push(template);
    }

    let mut instances: Vec<RenderInstance> = Vec::with_capacity(root.instances.len());
    for dto in root.instances {
        let template = by_id
            .get(&dto.template_id)
            .map(|&index| &templates[index])
            .ok_or_else(|| {
                ActaError::validation(
                    "instance",
                    "template_id",
                    format!(
                        "instance '{}' references unknown template '{}'",
                        dto.id, dto.template_id
                    ),
                )
            })?;
        let instance = dto.into_domain(template.category())?;
        validate_instance(&instance, template)?;
        if instances.iter().any(|existing| existing.id == instance.id) {
            return Err(ActaError::validation(
                "instance",
                "id",
                format!("duplicate instance id '{}'", instance.id),
            ));
        }
        instances.push(instance);
    }

    tracing::debug!(
        target: "acta::catalogue",
        templates = templates.len(),
        instances = instances.len(),
        "Parsed catalogue"
    );
    Ok(Catalogue {
        templates,
        instances,
    })
}

/// Reads and validates a catalogue file.
///
/// Unlike the engine config, a missing catalogue file is an error: there is
/// nothing to render without one.
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let content = fs::read_to_string(path)
        .map_err(|e| ActaError::io(format!("Failed to read catalogue at {:?}: {}", path, e)))?;
    let catalogue = parse_catalogue(&content)?;
    tracing::info!(
        target: "acta::catalogue",
        path = %path.display(),
        templates = catalogue.templates.len(),
        instances = catalogue.instances.len(),
        "Loaded catalogue"
    );
    Ok(catalogue)
}
