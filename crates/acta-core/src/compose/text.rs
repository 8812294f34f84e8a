//! Copy variants.

use super::model::TextVariants;
use crate::emotion::EmotionDimension;
use crate::persona::JourneyStage;
use crate::template::{Category, InstanceConfig};

pub fn text_variants(
    category: Category,
    custom: &InstanceConfig,
    stage: JourneyStage,
    dominant: EmotionDimension,
) -> TextVariants {
    let headline = custom
        .headline
        .clone()
        .unwrap_or_else(|| default_headline(category).to_string());
    let cta_label = custom
        .cta_label
        .clone()
        .unwrap_or_else(|| default_cta_label(stage).to_string());

    TextVariants {
        headline,
        cta_label,
        supporting_text: supporting_text(dominant).map(str::to_string),
    }
}

fn default_headline(category: Category) -> &'static str {
    match category {
        Category::ThreeDProduct => "Explore every angle",
        Category::ArTryOn => "See it on you",
        Category::Gamified => "Play to unlock your reward",
        Category::VrWalkthrough => "Step inside",
    }
}

fn default_cta_label(stage: JourneyStage) -> &'static str {
    match stage {
        JourneyStage::Awareness => "Learn more",
        JourneyStage::Consideration => "Compare options",
        JourneyStage::Decision => "Get started",
        JourneyStage::Retention => "Continue",
    }
}

fn supporting_text(dominant: EmotionDimension) -> Option<&'static str> {
    match dominant {
        EmotionDimension::Interest => None,
        EmotionDimension::Urgency => Some("Offer ends soon."),
        EmotionDimension::Hesitation => Some("No commitment. Cancel anytime."),
        EmotionDimension::Excitement => Some("You're on a roll. Keep going!"),
        EmotionDimension::Confusion => Some("Here's how it works, step by step."),
    }
}
