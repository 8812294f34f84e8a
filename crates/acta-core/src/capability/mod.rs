//! Capability domain module.
//!
//! Turns raw device signals into a normalized [`CapabilityProfile`].
//!
//! # Module Structure
//!
//! - `model`: Profile, tier enums and the raw `DeviceSignals` input
//! - `classifier`: The total, pure classification function

mod classifier;
mod model;

// Re-export public API
pub use classifier::{classify, parse_platform};
pub use model::{
    CapabilityProfile, DeviceSignals, GraphicsTier, ImmersiveSupport, PerformanceTier,
    PlatformClass, ScreenSize,
};
