//! Capability classification.

use super::model::{
    CapabilityProfile, DeviceSignals, GraphicsTier, ImmersiveSupport, PerformanceTier,
    PlatformClass,
};

const HEADSET_MARKERS: &[&str] = &["headset", "vr", "quest", "vision", "visionos", "hmd"];
const MOBILE_MARKERS: &[&str] = &[
    "mobile", "android", "ios", "iphone", "ipad", "ipados", "tablet",
];

const HIGH_TIER_MEMORY_MB: u32 = 4096;
const MEDIUM_TIER_MEMORY_MB: u32 = 2048;

/// Classifies raw device signals into a [`CapabilityProfile`].
///
/// Total and pure: any input, including an empty one, yields a profile.
pub fn classify(signals: &DeviceSignals) -> CapabilityProfile {
    let graphics_tier = GraphicsTier::from_level(signals.graphics_tier.unwrap_or(0));
    let memory = signals.device_memory_mb.unwrap_or(0);
    let platform_class = signals
        .platform
        .as_deref()
        .map(parse_platform)
        .unwrap_or(PlatformClass::Desktop);

    let performance_tier = if graphics_tier >= GraphicsTier::Advanced && memory >= HIGH_TIER_MEMORY_MB
    {
        PerformanceTier::High
    } else if graphics_tier >= GraphicsTier::Basic && memory >= MEDIUM_TIER_MEMORY_MB {
        PerformanceTier::Medium
    } else {
        PerformanceTier::Low
    };

    let headset = platform_class == PlatformClass::Headset;
    let immersive = signals.immersive_supported.unwrap_or(false);
    let camera = signals.camera_available.unwrap_or(false);

    let immersive_support = if headset && immersive {
        ImmersiveSupport::Both
    } else if camera && immersive && !headset {
        ImmersiveSupport::Ar
    } else if headset && !camera {
        ImmersiveSupport::Vr
    } else {
        ImmersiveSupport::None
    };

    CapabilityProfile {
        performance_tier,
        graphics_tier,
        immersive_support,
        platform_class,
        memory_class_mb: memory,
        screen_size: signals.screen.unwrap_or_default(),
    }
}

/// Maps a free-form platform label onto a [`PlatformClass`].
///
/// Markers match whole tokens split on non-alphanumerics, so "kiosk" is not
/// "ios". Headset markers win over mobile ones ("android-vr-headset" is a
/// headset).
pub fn parse_platform(label: &str) -> PlatformClass {
    let lower = label.to_ascii_lowercase();
    let has_marker = |markers: &[&str]| {
        lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| markers.contains(&token))
    };
    if has_marker(HEADSET_MARKERS) {
        PlatformClass::Headset
    } else if has_marker(MOBILE_MARKERS) {
        PlatformClass::Mobile
    } else {
        PlatformClass::Desktop
    }
}
