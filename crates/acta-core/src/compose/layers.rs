//! Composition rule tables.
//!
//! Each table is an exhaustive `match`, so a new tier, style or dimension
//! does not compile until it has a rule.

use super::model::{
    AdaptationPatch, CtaStyle, DetailLevel, InteractionHint, Pace, QualitySettings,
    RenderQuality,
};
use crate::capability::{CapabilityProfile, PerformanceTier, PlatformClass};
use crate::emotion::EmotionDimension;
use crate::persona::{BehaviorProfile, InteractionStyle, PreferredPace};

const HEADSET_TARGET_FPS: u32 = 90;

/// Quality settings and base adaptation for a device.
pub fn device_layer(capability: &CapabilityProfile) -> (QualitySettings, AdaptationPatch) {
    let (mut quality, detail) = match capability.performance_tier {
        PerformanceTier::Low => (
            QualitySettings {
                level: RenderQuality::Low,
                shadows: false,
                texture_resolution: 512,
                antialiasing: false,
                target_fps: 30,
            },
            DetailLevel::Reduced,
        ),
        PerformanceTier::Medium => (
            QualitySettings {
                level: RenderQuality::Medium,
                shadows: true,
                texture_resolution: 1024,
                antialiasing: true,
                target_fps: 60,
            },
            DetailLevel::Standard,
        ),
        PerformanceTier::High => (
            QualitySettings {
                level: RenderQuality::High,
                shadows: true,
                texture_resolution: 2048,
                antialiasing: true,
                target_fps: 60,
            },
            DetailLevel::Full,
        ),
    };
    if capability.platform_class == PlatformClass::Headset {
        quality.target_fps = HEADSET_TARGET_FPS;
    }

    let patch = AdaptationPatch {
        pace: Some(Pace::Maintain),
        cta_style: Some(CtaStyle::Standard),
        detail: Some(detail),
        hints: Vec::new(),
    };
    (quality, patch)
}

pub fn behavior_layer(behavior: &BehaviorProfile) -> AdaptationPatch {
    let pace = match behavior.pace {
        PreferredPace::Fast => Some(Pace::Accelerate),
        PreferredPace::Slow => Some(Pace::Slow),
        PreferredPace::Moderate => None,
    };
    let hint = match behavior.style {
        InteractionStyle::Scanner => InteractionHint::HighlightKeyPoints,
        InteractionStyle::Explorer => InteractionHint::EnableFreeExploration,
        InteractionStyle::Deliberate => InteractionHint::ShowDetailPanels,
        InteractionStyle::Casual => InteractionHint::GuidedTour,
    };
    AdaptationPatch {
        pace,
        cta_style: None,
        detail: None,
        hints: vec![hint],
    }
}

pub fn emotion_layer(dominant: EmotionDimension) -> AdaptationPatch {
    let (pace, cta_style, detail) = match dominant {
        EmotionDimension::Interest => (Pace::Maintain, CtaStyle::Subtle, None),
        EmotionDimension::Urgency => (Pace::Accelerate, CtaStyle::Prominent, None),
        EmotionDimension::Hesitation => (Pace::Slow, CtaStyle::Reassuring, None),
        EmotionDimension::Excitement => (Pace::Maintain, CtaStyle::Energetic, None),
        EmotionDimension::Confusion => (Pace::Slow, CtaStyle::Clear, Some(DetailLevel::Simplified)),
    };
    AdaptationPatch {
        pace: Some(pace),
        cta_style: Some(cta_style),
        detail,
        hints: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_dimension_sets_pace_and_cta() {
        for dimension in EmotionDimension::iter() {
            let patch = emotion_layer(dimension);
            assert!(patch.pace.is_some());
            assert!(patch.cta_style.is_some());
        }
    }

    #[test]
    fn test_hesitation_and_confusion_rules() {
        let hesitation = emotion_layer(EmotionDimension::Hesitation);
        assert_eq!(hesitation.pace, Some(Pace::Slow));
        assert_eq!(hesitation.cta_style, Some(CtaStyle::Reassuring));

        let confusion = emotion_layer(EmotionDimension::Confusion);
        assert_eq!(confusion.detail, Some(DetailLevel::Simplified));
        assert_eq!(confusion.cta_style, Some(CtaStyle::Clear));
    }

    #[test]
    fn test_headset_fps() {
        let mut capability = CapabilityProfile::conservative();
        capability.platform_class = PlatformClass::Headset;
        let (quality, _) = device_layer(&capability);
        assert_eq!(quality.target_fps, HEADSET_TARGET_FPS);
        assert_eq!(quality.level, RenderQuality::Low);
    }
}
