//! Catalogue write path.
//!
//! Templates and instances are validated here, once, at creation time.
//! The render path trusts whatever the catalogue returns.

use acta_core::error::Result;
use acta_core::id::IdGenerator;
use acta_core::template::{
    AssetManifest, CatalogueWriter, CategoryConfig, EngineKind, InstanceConfig, InstanceStatus,
    RenderInstance, RenderTemplate, TargetingRules, TemplateRepository, validate_instance,
    validate_template,
};
use std::sync::Arc;

/// Fields supplied by the author of a new template.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTemplate {
    pub name: String,
    pub engine_kind: EngineKind,
    pub config: CategoryConfig,
    pub asset_manifest: AssetManifest,
}

/// Fields supplied when placing a template.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInstance {
    pub template_id: String,
    pub targeting: TargetingRules,
    pub custom: InstanceConfig,
    pub status: InstanceStatus,
}

pub struct CatalogueService {
    templates: Arc<dyn TemplateRepository>,
    writer: Arc<dyn CatalogueWriter>,
    ids: Arc<dyn IdGenerator>,
}

impl CatalogueService {
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        writer: Arc<dyn CatalogueWriter>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            templates,
            writer,
            ids,
        }
    }

    /// Validates and stores a new template under a fresh id.
    pub async fn create_template(&self, new: NewTemplate) -> Result<RenderTemplate> {
        let template = RenderTemplate {
            id: self.ids.next_id(),
            name: new.name,
            engine_kind: new.engine_kind,
            config: new.config,
            asset_manifest: new.asset_manifest,
        };
        validate_template(&template)?;
        self.writer.put_template(template.clone()).await?;
        tracing::info!(
            target: "acta::catalogue",
            template_id = %template.id,
            category = %template.category(),
            "Template created"
        );
        Ok(template)
    }

    /// Validates and stores a new instance of an existing template.
    ///
    /// Fails with `NotFound` when the template does not exist.
    pub async fn create_instance(&self, new: NewInstance) -> Result<RenderInstance> {
        let template = self.templates.get_template(&new.template_id).await?;
        let instance = RenderInstance {
            id: self.ids.next_id(),
            template_id: new.template_id,
            targeting: new.targeting,
            custom: new.custom,
            status: new.status,
        };
        validate_instance(&instance, &template)?;
        self.writer.put_instance(instance.clone()).await?;
        tracing::info!(
            target: "acta::catalogue",
            instance_id = %instance.id,
            template_id = %instance.template_id,
            "Instance created"
        );
        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acta_core::id::SequentialIdGenerator;
    use acta_core::template::{
        AssetQuality, AssetVariant, CategoryOverrides, GameKind, InstanceRepository, Locomotion,
    };
    use acta_infrastructure::InMemoryCatalogue;

    fn service(catalogue: &InMemoryCatalogue) -> CatalogueService {
        CatalogueService::new(
            Arc::new(catalogue.clone()),
            Arc::new(catalogue.clone()),
            Arc::new(SequentialIdGenerator::new("id")),
        )
    }

    fn wheel() -> NewTemplate {
        NewTemplate {
            name: "Spin".to_string(),
            engine_kind: EngineKind::Babylon,
            config: CategoryConfig::Gamified {
                game: GameKind::SpinWheel,
                rewards: vec!["5% off".to_string()],
                max_attempts: 1,
                time_limit_secs: None,
            },
            asset_manifest: AssetManifest(vec![AssetVariant {
                asset_id: "skin".to_string(),
                quality: AssetQuality::Low,
                size_kb: 100,
                uri: "/skin.png".to_string(),
            }]),
        }
    }

    #[tokio::test]
    async fn test_create_template_and_instance() {
        let catalogue = InMemoryCatalogue::new();
        let service = service(&catalogue);

        let template = service.create_template(wheel()).await.unwrap();
        assert_eq!(template.id, "id-1");

        let instance = service
            .create_instance(NewInstance {
                template_id: template.id.clone(),
                targeting: TargetingRules::default(),
                custom: InstanceConfig::default(),
                status: InstanceStatus::Active,
            })
            .await
            .unwrap();
        assert_eq!(instance.id, "id-2");
        assert_eq!(catalogue.get_instance("id-2").await.unwrap(), instance);
    }

    #[tokio::test]
    async fn test_invalid_template_is_not_stored() {
        let catalogue = InMemoryCatalogue::new();
        let mut new = wheel();
        new.config = CategoryConfig::VrWalkthrough {
            scene_asset: "missing".to_string(),
            waypoints: Vec::new(),
            locomotion: Locomotion::Teleport,
        };

        let err = service(&catalogue).create_template(new).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(catalogue.template_count().await, 0);
    }

    #[tokio::test]
    async fn test_instance_override_must_match_category() {
        let catalogue = InMemoryCatalogue::new();
        let service = service(&catalogue);
        let template = service.create_template(wheel()).await.unwrap();

        let err = service
            .create_instance(NewInstance {
                template_id: template.id,
                targeting: TargetingRules::default(),
                custom: InstanceConfig {
                    overrides: CategoryOverrides::VrWalkthrough {
                        waypoints: None,
                        locomotion: None,
                    },
                    ..Default::default()
                },
                status: InstanceStatus::Draft,
            })
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_instance_of_unknown_template() {
        let catalogue = InMemoryCatalogue::new();
        let err = service(&catalogue)
            .create_instance(NewInstance {
                template_id: "nope".to_string(),
                targeting: TargetingRules::default(),
                custom: InstanceConfig::default(),
                status: InstanceStatus::Draft,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
