//! Data Transfer Objects (DTOs) for the catalogue file.
//!
//! The catalogue file uses flat string labels for categories and engine
//! kinds and a loose table for the category config. These DTOs keep that
//! storage shape out of the domain; conversion into domain types is where
//! unknown labels and mis-shaped configs are rejected.
//!
//! ### Catalogue Schema Version History
//! - **1.0.0**: Initial schema (`[[template]]` and `[[instance]]` arrays)

mod instance;
mod template;

use serde::{Deserialize, Serialize};

pub use instance::InstanceDto;
pub use template::TemplateDto;

/// Current schema version written into new catalogue files.
pub const CATALOGUE_SCHEMA_VERSION: &str = "1.0.0";
const CATALOGUE_SCHEMA_MAJOR: u32 = 1;

fn default_schema_version() -> String {
    CATALOGUE_SCHEMA_VERSION.to_string()
}

/// Root of a catalogue TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueDto {
    #[serde(default = "default_schema_version")]
    pub version: String,
    #[serde(default, rename = "template")]
    pub templates: Vec<TemplateDto>,
    #[serde(default, rename = "instance")]
    pub instances: Vec<InstanceDto>,
}

impl CatalogueDto {
    /// Major component of the schema version, if it parses.
    pub fn major_version(&self) -> Option<u32> {
        self.version.split('.').next()?.parse().ok()
    }

    /// Minor and patch bumps are backward compatible; majors are not.
    pub fn is_supported(&self) -> bool {
        self.major_version() == Some(CATALOGUE_SCHEMA_MAJOR)
    }
}
