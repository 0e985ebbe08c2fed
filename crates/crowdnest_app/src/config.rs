//! Crowdnest configuration file handling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crowdnest_animation::TextFaderConfig;
use crowdnest_gallery::GalleryConfig;
use serde::{Deserialize, Serialize};

use crate::headless_runtime::HeadlessRunConfig;

/// Name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "crowdnest.toml";

/// Top-level configuration (crowdnest.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CrowdnestConfig {
    #[serde(default)]
    pub gallery: GalleryConfig,
    /// Headline fader on the landing page
    #[serde(default)]
    pub hero: TextFaderConfig,
    #[serde(default)]
    pub headless: HeadlessRunConfig,
}

impl CrowdnestConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: CrowdnestConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load `path` if given, else `crowdnest.toml` in `dir` if it exists,
    /// else the defaults
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
