//! Render template domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Content category of a template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
pub enum Category {
    #[serde(rename = "3d_product")]
    #[strum(serialize = "3d_product")]
    ThreeDProduct,
    #[serde(rename = "ar_tryon")]
    #[strum(serialize = "ar_tryon")]
    ArTryOn,
    #[serde(rename = "gamified")]
    #[strum(serialize = "gamified")]
    Gamified,
    #[serde(rename = "vr_walkthrough")]
    #[strum(serialize = "vr_walkthrough")]
    VrWalkthrough,
}

impl Category {
    /// Whether content of this category has a 2D canvas rendition.
    ///
    /// AR try-on composites onto a live camera feed and has nothing to draw
    /// without it, so its terminal fallback is a static image.
    pub fn has_canvas_rendition(self) -> bool {
        !matches!(self, Category::ArTryOn)
    }
}

/// Rendering engine family a template is authored for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EngineKind {
    ThreeJs,
    Babylon,
    AFrame,
    WebxrNative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnchorKind {
    Face,
    Wrist,
    Feet,
    Floor,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameKind {
    SpinWheel,
    Quiz,
    ScratchCard,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Locomotion {
    Teleport,
    Smooth,
}

/// Category-specific scene configuration.
///
/// The tag doubles as the template's category, so a template can never
/// carry a config shaped for a different category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CategoryConfig {
    #[serde(rename = "3d_product")]
    ThreeDProduct {
        model_asset: String,
        auto_rotate: bool,
        zoom_enabled: bool,
        background: String,
    },
    #[serde(rename = "ar_tryon")]
    ArTryOn {
        model_asset: String,
        anchor: AnchorKind,
        scale: f64,
    },
    #[serde(rename = "gamified")]
    Gamified {
        game: GameKind,
        rewards: Vec<String>,
        max_attempts: u32,
        time_limit_secs: Option<u32>,
    },
    #[serde(rename = "vr_walkthrough")]
    VrWalkthrough {
        scene_asset: String,
        waypoints: Vec<String>,
        locomotion: Locomotion,
    },
}

impl CategoryConfig {
    pub fn category(&self) -> Category {
        match self {
            CategoryConfig::ThreeDProduct { .. } => Category::ThreeDProduct,
            CategoryConfig::ArTryOn { .. } => Category::ArTryOn,
            CategoryConfig::Gamified { .. } => Category::Gamified,
            CategoryConfig::VrWalkthrough { .. } => Category::VrWalkthrough,
        }
    }

    /// Asset ids the scene refers to directly.
    pub fn referenced_assets(&self) -> Vec<&str> {
        match self {
            CategoryConfig::ThreeDProduct { model_asset, .. }
            | CategoryConfig::ArTryOn { model_asset, .. } => vec![model_asset.as_str()],
            CategoryConfig::VrWalkthrough { scene_asset, .. } => vec![scene_asset.as_str()],
            CategoryConfig::Gamified { .. } => Vec::new(),
        }
    }

    /// Applies instance overrides on top of this base config.
    ///
    /// Returns `None` when the override targets a different category.
    pub fn with_overrides(&self, overrides: &CategoryOverrides) -> Option<CategoryConfig> {
        let merged = match (self.clone(), overrides) {
            (
                CategoryConfig::ThreeDProduct {
                    model_asset,
                    auto_rotate,
                    zoom_enabled,
                    background,
                },
                CategoryOverrides::ThreeDProduct {
                    auto_rotate: o_rotate,
                    zoom_enabled: o_zoom,
                    background: o_background,
                },
            ) => CategoryConfig::ThreeDProduct {
                model_asset,
                auto_rotate: o_rotate.unwrap_or(auto_rotate),
                zoom_enabled: o_zoom.unwrap_or(zoom_enabled),
                background: o_background.clone().unwrap_or(background),
            },
            (
                CategoryConfig::ArTryOn {
                    model_asset,
                    anchor,
                    scale,
                },
                CategoryOverrides::ArTryOn {
                    anchor: o_anchor,
                    scale: o_scale,
                },
            ) => CategoryConfig::ArTryOn {
                model_asset,
                anchor: o_anchor.unwrap_or(anchor),
                scale: o_scale.unwrap_or(scale),
            },
            (
                CategoryConfig::Gamified {
                    game,
                    rewards,
                    max_attempts,
                    time_limit_secs,
                },
                CategoryOverrides::Gamified {
                    rewards: o_rewards,
                    max_attempts: o_attempts,
                    time_limit_secs: o_limit,
                },
            ) => CategoryConfig::Gamified {
                game,
                rewards: o_rewards.clone().unwrap_or(rewards),
                max_attempts: o_attempts.unwrap_or(max_attempts),
                time_limit_secs: o_limit.or(time_limit_secs),
            },
            (
                CategoryConfig::VrWalkthrough {
                    scene_asset,
                    waypoints,
                    locomotion,
                },
                CategoryOverrides::VrWalkthrough {
                    waypoints: o_waypoints,
                    locomotion: o_locomotion,
                },
            ) => CategoryConfig::VrWalkthrough {
                scene_asset,
                waypoints: o_waypoints.clone().unwrap_or(waypoints),
                locomotion: o_locomotion.unwrap_or(locomotion),
            },
            (base, CategoryOverrides::None) => base,
            _ => return None,
        };
        Some(merged)
    }
}

/// Instance-level overrides for a [`CategoryConfig`].
///
/// Asset references are deliberately absent: an instance restyles a
/// template, it does not swap its content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CategoryOverrides {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "3d_product")]
    ThreeDProduct {
        auto_rotate: Option<bool>,
        zoom_enabled: Option<bool>,
        background: Option<String>,
    },
    #[serde(rename = "ar_tryon")]
    ArTryOn {
        anchor: Option<AnchorKind>,
        scale: Option<f64>,
    },
    #[serde(rename = "gamified")]
    Gamified {
        rewards: Option<Vec<String>>,
        max_attempts: Option<u32>,
        time_limit_secs: Option<u32>,
    },
    #[serde(rename = "vr_walkthrough")]
    VrWalkthrough {
        waypoints: Option<Vec<String>>,
        locomotion: Option<Locomotion>,
    },
}

impl CategoryOverrides {
    /// The category these overrides apply to, `None` for the empty override.
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryOverrides::None => None,
            CategoryOverrides::ThreeDProduct { .. } => Some(Category::ThreeDProduct),
            CategoryOverrides::ArTryOn { .. } => Some(Category::ArTryOn),
            CategoryOverrides::Gamified { .. } => Some(Category::Gamified),
            CategoryOverrides::VrWalkthrough { .. } => Some(Category::VrWalkthrough),
        }
    }
}

/// Quality grade of one asset variant, ordered lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssetQuality {
    Low,
    Medium,
    High,
}

/// One concrete file of a logical asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetVariant {
    /// Logical asset id shared by all variants of the same asset
    pub asset_id: String,
    pub quality: AssetQuality,
    pub size_kb: u32,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest(pub Vec<AssetVariant>);

impl AssetManifest {
    pub fn variants(&self) -> &[AssetVariant] {
        &self.0
    }

    /// Logical asset ids in first-appearance order.
    pub fn asset_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for variant in &self.0 {
            if !ids.contains(&variant.asset_id.as_str()) {
                ids.push(&variant.asset_id);
            }
        }
        ids
    }

    /// All variants of one logical asset.
    pub fn variants_of<'a>(&'a self, asset_id: &'a str) -> impl Iterator<Item = &'a AssetVariant> {
        self.0.iter().filter(move |v| v.asset_id == asset_id)
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.0.iter().any(|v| v.asset_id == asset_id)
    }
}

/// A reusable interactive content definition.
///
/// Owned by the content catalogue and read-only to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTemplate {
    pub id: String,
    pub name: String,
    pub engine_kind: EngineKind,
    pub config: CategoryConfig,
    #[serde(default)]
    pub asset_manifest: AssetManifest,
}

impl RenderTemplate {
    pub fn category(&self) -> Category {
        self.config.category()
    }
}
