use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/comicctl/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Where comic assets live and where the metadata store is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per comic
    #[serde(default = "default_comics_root")]
    pub comics_root: PathBuf,

    /// The comics.json store
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_comics_root() -> PathBuf {
    PathBuf::from("public/comics")
}

fn default_output() -> PathBuf {
    PathBuf::from("src/data/comics.json")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            comics_root: default_comics_root(),
            output: default_output(),
        }
    }
}

/// Tuning for the create command's questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Substring the VTT step looks for in the video directory
    #[serde(default = "default_vtt_pattern")]
    pub vtt_pattern: String,
}

fn default_vtt_pattern() -> String {
    ".m3u8".to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            vtt_pattern: default_vtt_pattern(),
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/comicctl/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("comicctl").join("config.toml"))
    }

    /// Get the comics root, with CLI override taking precedence
    pub fn comics_root(&self, cli_override: Option<&PathBuf>) -> PathBuf {
        cli_override
            .cloned()
            .unwrap_or_else(|| self.paths.comics_root.clone())
    }

    /// Get the store path, with CLI override taking precedence
    pub fn output(&self, cli_override: Option<&PathBuf>) -> PathBuf {
        cli_override
            .cloned()
            .unwrap_or_else(|| self.paths.output.clone())
    }
}
