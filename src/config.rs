use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub description: DescriptionConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Documentation conventions the option extractor relies on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Heading text that opens the options section
    #[serde(default = "default_section_heading")]
    pub section_heading: String,

    /// Level of the options section heading
    #[serde(default = "default_section_depth")]
    pub section_depth: usize,

    /// Substring of a top-level option name that marks positional options
    #[serde(default = "default_tuple_marker")]
    pub tuple_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            section_heading: default_section_heading(),
            section_depth: default_section_depth(),
            tuple_marker: default_tuple_marker(),
        }
    }
}

fn default_section_heading() -> String {
    "Configuration".to_string()
}

fn default_section_depth() -> usize {
    2
}

fn default_tuple_marker() -> String {
    "1st option".to_string()
}

/// Where a rule's summary paragraph is found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionConfig {
    #[serde(default = "default_description_heading")]
    pub heading: String,

    #[serde(default = "default_description_depth")]
    pub depth: usize,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            heading: default_description_heading(),
            depth: default_description_depth(),
        }
    }
}

fn default_description_heading() -> String {
    "What it does".to_string()
}

fn default_description_depth() -> usize {
    3
}

/// Batch generation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the documentation tree (`<docs_dir>/<scope>/<rule>.md`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<PathBuf>,

    /// Rules file to write; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Skip rules whose documentation file is missing instead of failing
    #[serde(default)]
    pub skip_missing: bool,
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/lintdoc/config.toml
    /// - Linux: ~/.config/lintdoc/config.toml
    /// - Windows: %APPDATA%/lintdoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lintdoc").join("config.toml"))
    }

    /// Load config from the platform path, or return defaults if it is absent
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.is_file()) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring config file: {err:#}");
                Self::default()
            }
        }
    }

    /// Load config from an explicitly named file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))
    }

    /// Save config to the platform path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| eyre!("could not determine config directory"))?;
        self.save_to(&path)?;
        Ok(path)
    }
}
