//! Capability profile domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Coarse CPU/GPU/memory budget of a client.
///
/// Variants are declared lowest first so the derived ordering can be used
/// for "at least" comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
}

/// Graphics API capability, ordered lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GraphicsTier {
    None,
    Basic,
    Advanced,
}

impl GraphicsTier {
    /// Maps the raw integer tier reported by the client (0/1/2).
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => GraphicsTier::None,
            1 => GraphicsTier::Basic,
            _ => GraphicsTier::Advanced,
        }
    }
}

/// Which immersive session modes the client can enter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImmersiveSupport {
    None,
    Ar,
    Vr,
    Both,
}

impl ImmersiveSupport {
    /// True when a VR session can be started.
    pub fn supports_vr(self) -> bool {
        matches!(self, ImmersiveSupport::Vr | ImmersiveSupport::Both)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlatformClass {
    Desktop,
    Mobile,
    Headset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Normalized summary of a client's rendering ability.
///
/// Derived per request from [`DeviceSignals`]; never stored as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityProfile {
    pub performance_tier: PerformanceTier,
    pub graphics_tier: GraphicsTier,
    pub immersive_support: ImmersiveSupport,
    pub platform_class: PlatformClass,
    pub memory_class_mb: u32,
    pub screen_size: ScreenSize,
}

impl CapabilityProfile {
    /// The profile of a client that reported nothing at all.
    pub fn conservative() -> Self {
        Self {
            performance_tier: PerformanceTier::Low,
            graphics_tier: GraphicsTier::None,
            immersive_support: ImmersiveSupport::None,
            platform_class: PlatformClass::Desktop,
            memory_class_mb: 0,
            screen_size: ScreenSize::default(),
        }
    }
}

/// Raw, client-reported device signals.
///
/// Every field is optional; an absent value is read as the most
/// conservative one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSignals {
    /// Graphics API tier as reported by the client (0, 1 or 2)
    pub graphics_tier: Option<u8>,
    /// Whether the client can start an immersive (XR) session
    pub immersive_supported: Option<bool>,
    /// Approximate device memory in megabytes
    pub device_memory_mb: Option<u32>,
    /// Free-form platform label, e.g. "android", "quest-headset"
    pub platform: Option<String>,
    /// Whether a camera feed is available for AR compositing
    pub camera_available: Option<bool>,
    pub screen: Option<ScreenSize>,
}
