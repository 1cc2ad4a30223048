//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::ToolConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DROID_DEBCONFDB_CONFIG";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigStore {
    location: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store resolved from `DROID_DEBCONFDB_CONFIG` or `~/.droid/debconfdb.yaml`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            location: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        }
    }

    /// Store reading a fixed file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Some(path.into()),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ToolConfig> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ToolConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        // An empty file deserializes to null, not a mapping.
        if content.trim().is_empty() {
            return Ok(ToolConfig::default());
        }
        let config: ToolConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.location {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".droid").join("debconfdb.yaml"))
    }
}
