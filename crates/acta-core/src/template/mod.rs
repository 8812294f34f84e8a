//! Template and instance domain module.
//!
//! A template is a reusable interactive content definition owned by the
//! content catalogue; an instance is one deployed placement of a template.
//!
//! # Module Structure
//!
//! - `model`: `RenderTemplate`, category configs and the asset manifest
//! - `instance`: `RenderInstance`, instance overrides and targeting rules
//! - `repository`: Catalogue port traits
//! - `validation`: Creation-time validation

mod instance;
mod model;
mod repository;
mod validation;

// Re-export public API
pub use instance::{InstanceConfig, InstanceStatus, RenderInstance, TargetingRules};
pub use model::{
    AnchorKind, AssetManifest, AssetQuality, AssetVariant, Category, CategoryConfig,
    CategoryOverrides, EngineKind, GameKind, Locomotion, RenderTemplate,
};
pub use repository::{CatalogueWriter, InstanceRepository, TemplateRepository};
pub use validation::{validate_instance, validate_template};
