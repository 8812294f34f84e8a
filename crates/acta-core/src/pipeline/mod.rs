//! Rendering pipeline domain module.
//!
//! # Module Structure
//!
//! - `model`: Pipeline names, requirements and the selection result
//! - `selector`: The decision cascade and the static fallback table

mod model;
mod selector;

// Re-export public API
pub use model::{Pipeline, PipelineRequirements, PipelineSelection};
pub use selector::PipelineSelector;
