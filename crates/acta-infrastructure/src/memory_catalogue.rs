//! In-memory catalogue.
//!
//! Holds validated templates and instances behind a `RwLock` so any number
//! of concurrent renders can read while the catalogue service writes.

use acta_core::error::{ActaError, Result};
use acta_core::template::{
    CatalogueWriter, InstanceRepository, RenderInstance, RenderTemplate, TemplateRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    templates: Arc<RwLock<HashMap<String, RenderTemplate>>>,
    instances: Arc<RwLock<HashMap<String, RenderInstance>>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from already validated entries.
    pub fn with_entries(templates: Vec<RenderTemplate>, instances: Vec<RenderInstance>) -> Self {
        let templates = templates.into_iter().map(|t| (t.id.clone(), t)).collect();
        let instances = instances.into_iter().map(|i| (i.id.clone(), i)).collect();
        Self {
            templates: Arc::new(RwLock::new(templates)),
            instances: Arc::new(RwLock::new(instances)),
        }
    }

    pub async fn template_count(&self) -> usize {
        self.templates.read().await.len()
    }

    pub async fn instance_count(&self) -> usize {
        self.instances.read().await.len()
    }
}

#[async_trait]
impl TemplateRepository for InMemoryCatalogue {
    async fn get_template(&self, template_id: &str) -> Result<RenderTemplate> {
        self.templates
            .read()
            .await
            .get(template_id)
            .cloned()
            .ok_or_else(|| ActaError::not_found("template", template_id))
    }
}

#[async_trait]
impl InstanceRepository for InMemoryCatalogue {
    async fn get_instance(&self, instance_id: &str) -> Result<RenderInstance> {
        self.instances
            .read()
            .await
            .get(instance_id)
            .cloned()
            .ok_or_else(|| ActaError::not_found("instance", instance_id))
    }
}

#[async_trait]
impl CatalogueWriter for InMemoryCatalogue {
    async fn put_template(&self, template: RenderTemplate) -> Result<()> {
        self.templates
            .write()
            .await
            .insert(template.id.clone(), template);
        Ok(())
    }

    async fn put_instance(&self, instance: RenderInstance) -> Result<()> {
        self.instances
            .write()
            .await
            .insert(instance.id.clone(), instance);
        Ok(())
    }
}
