//! RenderInstance DTO.

use acta_core::error::{ActaError, Result};
use acta_core::template::{
    Category, CategoryOverrides, InstanceConfig, InstanceStatus, RenderInstance, TargetingRules,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceDto {
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub targeting: TargetingRules,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub cta_label: Option<String>,
    /// Partial category config; inherits the template's category unless
    /// the table names one explicitly
    #[serde(default)]
    pub overrides: Option<toml::Table>,
}

impl InstanceDto {
    pub fn into_domain(self, template_category: Category) -> Result<RenderInstance> {
        let status = match self.status.as_deref() {
            None => InstanceStatus::default(),
            Some(label) => InstanceStatus::from_str(label).map_err(|_| {
                ActaError::validation("instance", "status", format!("unknown status '{label}'"))
            })?,
        };

        let overrides = match self.overrides {
            None => CategoryOverrides::None,
            Some(mut table) => {
                table
                    .entry("category")
                    .or_insert(toml::Value::String(template_category.to_string()));
                toml::Value::Table(table)
                    .try_into()
                    .map_err(|e: toml::de::Error| {
                        ActaError::validation("instance", "overrides", e.to_string())
                    })?
            }
        };

        Ok(RenderInstance {
            id: self.id,
            template_id: self.template_id,
            targeting: self.targeting,
            custom: InstanceConfig {
                headline: self.headline,
                cta_label: self.cta_label,
                overrides,
            },
            status,
        })
    }
}
