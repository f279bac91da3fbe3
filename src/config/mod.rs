//! Application configuration: where the state store and asset cache live on
//! disk. Loads fall back to defaults when the file is absent; saves stage to
//! a temporary file and rename into place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

const CONFIG_FILE: &str = "config.json";

/// User-configurable application paths and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional custom root for persisted state. Defaults to the platform
    /// data directory under `glassbudget`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,
    /// Optional custom root for the offline asset cache. Defaults to
    /// `<data root>/cache`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_root: Option<PathBuf>,
}

impl Config {
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("glassbudget")
    }

    pub fn resolve_cache_root(&self) -> PathBuf {
        if let Some(path) = &self.cache_root {
            return path.clone();
        }
        self.resolve_data_root().join("cache")
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, StoreError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.config_path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert!(config.data_root.is_none());
    }

    #[test]
    fn config_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            data_root: Some(PathBuf::from("/tmp/budget-data")),
            cache_root: None,
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.data_root, Some(PathBuf::from("/tmp/budget-data")));
    }

    #[test]
    fn cache_root_defaults_under_data_root() {
        let config = Config {
            data_root: Some(PathBuf::from("/tmp/budget-data")),
            cache_root: None,
        };
        assert_eq!(
            config.resolve_cache_root(),
            PathBuf::from("/tmp/budget-data/cache")
        );
    }
}
