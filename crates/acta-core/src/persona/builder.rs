//! Persona derivation from raw signals.

use super::model::{
    BehaviorProfile, ContextProfile, EngagementLevel, InteractionStyle, JourneyStage,
    PersonaVector, PreferredPace, TimeOfDay, TrafficSource, UserContext,
};
use crate::capability::CapabilityProfile;
use crate::emotion::{BehaviorSignals, ScrollPattern};
use std::str::FromStr;

const SEARCH_HOSTS: &[&str] = &["google.", "bing.", "duckduckgo.", "yahoo.", "baidu.", "yandex."];
const SOCIAL_HOSTS: &[&str] = &[
    "facebook.",
    "instagram.",
    "twitter.",
    "linkedin.",
    "tiktok.",
    "reddit.",
    "pinterest.",
];
const EMAIL_MARKERS: &[&str] = &["mail."];

/// Derives a behavior profile from one telemetry snapshot and the number
/// of interactions the session has seen so far.
pub fn derive_behavior(signals: &BehaviorSignals, interaction_count: u64) -> BehaviorProfile {
    let speed = signals.speed();
    let dwell = signals.dwell_time_ms;

    let engagement = if (dwell >= 30_000 && speed >= 0.5) || interaction_count >= 5 {
        EngagementLevel::High
    } else if dwell >= 10_000 || interaction_count >= 2 {
        EngagementLevel::Medium
    } else {
        EngagementLevel::Low
    };

    let style = match signals.scroll_pattern {
        ScrollPattern::Fast => InteractionStyle::Scanner,
        ScrollPattern::Engaged => InteractionStyle::Explorer,
        _ if speed < 0.3 && dwell >= 20_000 => InteractionStyle::Deliberate,
        _ => InteractionStyle::Casual,
    };

    let pace = if speed > 0.7 {
        PreferredPace::Fast
    } else if speed < 0.3 {
        PreferredPace::Slow
    } else {
        PreferredPace::Moderate
    };

    let mut readiness = 0.1 * interaction_count.min(5) as f64;
    if signals.scroll_pattern == ScrollPattern::Engaged {
        readiness += 0.3;
    }
    if dwell >= 30_000 {
        readiness += 0.2;
    }

    BehaviorProfile {
        engagement,
        style,
        pace,
        conversion_readiness: readiness.clamp(0.0, 1.0),
    }
}

pub fn derive_context(user: &UserContext) -> ContextProfile {
    let time_of_day = match user.local_hour {
        Some(5..=11) => TimeOfDay::Morning,
        Some(12..=16) | None => TimeOfDay::Afternoon,
        Some(17..=21) => TimeOfDay::Evening,
        Some(_) => TimeOfDay::Night,
    };

    let traffic_source = user
        .traffic_source
        .as_deref()
        .and_then(|label| TrafficSource::from_str(label.trim()).ok())
        .or_else(|| user.referrer.as_deref().map(source_from_referrer))
        .unwrap_or_default();

    let journey_stage = user
        .journey_stage
        .as_deref()
        .and_then(|label| JourneyStage::from_str(label.trim()).ok())
        .unwrap_or_default();

    ContextProfile {
        time_of_day,
        traffic_source,
        journey_stage,
    }
}

fn source_from_referrer(referrer: &str) -> TrafficSource {
    let lower = referrer.to_ascii_lowercase();
    if lower.trim().is_empty() {
        TrafficSource::Direct
    } else if EMAIL_MARKERS.iter().any(|h| lower.contains(h)) {
        // Webmail hosts share domains with search engines (mail.google.com).
        TrafficSource::Email
    } else if SEARCH_HOSTS.iter().any(|h| lower.contains(h)) {
        TrafficSource::Search
    } else if SOCIAL_HOSTS.iter().any(|h| lower.contains(h)) {
        TrafficSource::Social
    } else {
        TrafficSource::Referral
    }
}

pub fn build_persona(
    capability: CapabilityProfile,
    signals: &BehaviorSignals,
    interaction_count: u64,
    user: &UserContext,
) -> PersonaVector {
    PersonaVector {
        capability,
        behavior: derive_behavior(signals, interaction_count),
        context: derive_context(user),
    }
}
