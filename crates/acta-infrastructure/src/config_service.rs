//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the engine configuration
//! from the configuration file (~/.config/acta/config.toml by default).

use acta_core::config::EngineConfig;
use acta_core::error::{ActaError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

const CONFIG_DIR_NAME: &str = "acta";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration service that loads and caches the engine configuration.
///
/// A missing or empty file yields the defaults; a malformed one is an error
/// so a typo never silently reverts settings.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<EngineConfig>>>,
}

impl ConfigService {
    /// Uses the platform config directory.
    pub fn new() -> Self {
        Self::with_path_opt(default_config_path())
    }

    /// Uses an explicit config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_path_opt(Some(path.into()))
    }

    fn with_path_opt(path: Option<PathBuf>) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<EngineConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| ActaError::internal(format!("config lock poisoned: {e}")))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = match &self.path {
            Some(path) => load_config_file(path)?,
            None => EngineConfig::default(),
        };

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| ActaError::internal(format!("config lock poisoned: {e}")))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/.config/acta/config.toml` (platform equivalent), if resolvable.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn load_config_file(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(EngineConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ActaError::config(format!("Failed to read config file at {:?}: {}", path, e)))?;

    if content.trim().is_empty() {
        return Ok(EngineConfig::default());
    }

    toml::from_str(&content)
        .map_err(|e| ActaError::config(format!("Failed to parse TOML from {:?}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acta_core::config::LogFormat;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_loads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[logging]\nformat = \"json\"\nlevel = \"debug\"\n").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");

        // cached until invalidated
        fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().logging.level, "debug");
        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().logging.level, "warn");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analytics\nenabled = ").unwrap();
        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_config());
    }
}
