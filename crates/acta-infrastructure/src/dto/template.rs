//! RenderTemplate DTO.

use acta_core::error::{ActaError, Result};
use acta_core::template::{
    AssetManifest, AssetVariant, Category, CategoryConfig, EngineKind, RenderTemplate,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub engine_kind: String,
    /// Category-specific fields, shaped by `category`
    #[serde(default)]
    pub config: toml::Table,
    #[serde(default)]
    pub asset_manifest: Option<toml::Value>,
}

impl TemplateDto {
    pub fn into_domain(self) -> Result<RenderTemplate> {
        let category = Category::from_str(&self.category).map_err(|_| {
            ActaError::validation(
                "template",
                "category",
                format!("unknown category '{}'", self.category),
            )
        })?;
        let engine_kind = EngineKind::from_str(&self.engine_kind).map_err(|_| {
            ActaError::validation(
                "template",
                "engine_kind",
                format!("unknown engine kind '{}'", self.engine_kind),
            )
        })?;

        let mut table = self.config;
        table.insert(
            "category".to_string(),
            toml::Value::String(category.to_string()),
        );
        let config: CategoryConfig = toml::Value::Table(table).try_into().map_err(
            |e: toml::de::Error| {
                ActaError::validation("template", "config", format!("{} config: {}", category, e))
            },
        )?;

        let asset_manifest = match self.asset_manifest {
            None => AssetManifest::default(),
            Some(toml::Value::Array(entries)) => {
                let mut variants = Vec::with_capacity(entries.len());
                for (index, entry) in entries.into_iter().enumerate() {
                    let variant: AssetVariant = entry.try_into().map_err(|e: toml::de::Error| {
                        ActaError::validation(
                            "template",
                            format!("asset_manifest[{index}]"),
                            e.to_string(),
                        )
                    })?;
                    variants.push(variant);
                }
                AssetManifest(variants)
            }
            Some(other) => {
                return Err(ActaError::validation(
                    "template",
                    "asset_manifest",
                    format!("must be an array, found {}", other.type_str()),
                ));
            }
        };

        Ok(RenderTemplate {
            id: self.id,
            name: self.name,
            engine_kind,
            config,
            asset_manifest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> TemplateDto {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_into_domain_product() {
        let dto = parse(
            r##"
id = "tpl-1"
name = "Sneaker"
category = "3d_product"
engine_kind = "three_js"

[config]
model_asset = "sneaker"
auto_rotate = true
zoom_enabled = true
background = "#fafafa"

[[asset_manifest]]
asset_id = "sneaker"
quality = "high"
size_kb = 9000
uri = "/assets/sneaker-high.glb"
"##,
        );
        let template = dto.into_domain().unwrap();
        assert_eq!(template.category(), Category::ThreeDProduct);
        assert_eq!(template.engine_kind, EngineKind::ThreeJs);
        assert_eq!(template.asset_manifest.variants().len(), 1);
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let dto = parse(
            r#"
id = "tpl-1"
name = "Hologram"
category = "hologram"
engine_kind = "three_js"
"#,
        );
        let err = dto.into_domain().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("hologram"));
    }

    #[test]
    fn test_manifest_must_be_array() {
        let dto = parse(
            r#"
id = "tpl-1"
name = "Wheel"
category = "gamified"
engine_kind = "babylon"
asset_manifest = "sneaker.glb"

[config]
game = "spin_wheel"
rewards = ["10% off"]
max_attempts = 1
"#,
        );
        let err = dto.into_domain().unwrap_err();
        assert!(matches!(err, ActaError::Validation { ref field, .. } if field == "asset_manifest"));
    }

    #[test]
    fn test_config_shape_checked_against_category() {
        let dto = parse(
            r#"
id = "tpl-1"
name = "Wheel"
category = "gamified"
engine_kind = "babylon"

[config]
model_asset = "sneaker"
"#,
        );
        let err = dto.into_domain().unwrap_err();
        assert!(matches!(err, ActaError::Validation { ref field, .. } if field == "config"));
    }
}
