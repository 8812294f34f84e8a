//! Catalogue port traits.
//!
//! The content catalogue is an external collaborator; the renderer only
//! reads from it on the render path. Writes happen through
//! [`CatalogueWriter`] after creation-time validation.

use super::instance::RenderInstance;
use super::model::RenderTemplate;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Finds a template by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(template)`: Template found
    /// - `Err(ActaError::NotFound)`: No such template
    async fn get_template(&self, template_id: &str) -> Result<RenderTemplate>;
}

#[async_trait]
pub trait InstanceRepository: Send + Sync {
    /// Finds an instance by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(instance)`: Instance found
    /// - `Err(ActaError::NotFound)`: No such instance
    async fn get_instance(&self, instance_id: &str) -> Result<RenderInstance>;
}

/// Write side of the catalogue. Callers validate before storing.
#[async_trait]
pub trait CatalogueWriter: Send + Sync {
    async fn put_template(&self, template: RenderTemplate) -> Result<()>;

    async fn put_instance(&self, instance: RenderInstance) -> Result<()>;
}
