//! Error types for ACTA.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole renderer.
///
/// Only `NotFound` ever reaches the caller of a render or interaction
/// operation. The other domain variants are produced at the edges and
/// recovered locally: validation happens at creation time, sink and asset
/// failures are turned into log lines or render warnings, and session
/// conflicts are retried by the tracker.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActaError {
    /// Template or instance is absent from the catalogue
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Malformed template or instance configuration
    #[error("Invalid {entity_type}: {field} - {message}")]
    Validation {
        entity_type: &'static str,
        field: String,
        message: String,
    },

    /// Analytics sink failure (never surfaced past the emitter)
    #[error("Analytics sink error: {0}")]
    AnalyticsSink(String),

    /// Asset variant could not be resolved for the requested tier
    #[error("Asset optimization error: '{asset_id}' - {message}")]
    AssetOptimization { asset_id: String, message: String },

    /// Versioned session write lost a race
    #[error(
        "Session conflict on {instance_id}/{session_id}: expected version {expected}, found {actual}"
    )]
    SessionConflict {
        instance_id: String,
        session_id: String,
        expected: u64,
        actual: u64,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ActaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(
        entity_type: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            entity_type,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an AnalyticsSink error
    pub fn analytics_sink(message: impl Into<String>) -> Self {
        Self::AnalyticsSink(message.into())
    }

    /// Creates an AssetOptimization error
    pub fn asset_optimization(asset_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetOptimization {
            asset_id: asset_id.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a session conflict
    pub fn is_session_conflict(&self) -> bool {
        matches!(self, Self::SessionConflict { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ActaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ActaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ActaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ActaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ActaError>`.
pub type Result<T> = std::result::Result<T, ActaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ActaError::not_found("instance", "inst-1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: instance 'inst-1'");
    }

    #[test]
    fn test_validation_message() {
        let err = ActaError::validation("template", "category", "unknown category 'hologram'");
        assert!(err.is_validation());
        assert!(err.to_string().contains("unknown category 'hologram'"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ActaError = json_err.into();
        assert!(matches!(err, ActaError::Serialization { ref format, .. } if format == "JSON"));
    }
}
