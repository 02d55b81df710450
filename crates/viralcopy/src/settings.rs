//! File-based settings for the `viralcopy` binary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use viralcopy_error::{ConfigError, IoError, ViralCopyResult};
use viralcopy_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "viralcopy.toml";

/// Top-level settings loaded from TOML.
///
/// The API key is deliberately absent; it comes from the environment or the
/// command line only.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralCopySettings {
    /// Gemini endpoint settings
    #[serde(default)]
    pub gemini: GeminiSettings,
}

/// The `[gemini]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL up to and including the API version
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ViralCopySettings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read and a configuration
    /// error if the TOML is invalid.
    #[tracing::instrument(skip_all, fields(settings_path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ViralCopyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| IoError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        tracing::debug!(model = %settings.gemini.model, "Loaded settings");
        Ok(settings)
    }

    /// Load from `path` if given, else from `viralcopy.toml` if it exists,
    /// else defaults.
    pub fn load(path: Option<&Path>) -> ViralCopyResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                tracing::debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the client configuration with the given API key.
    pub fn into_gemini_config(self, api_key: Option<String>) -> ViralCopyResult<GeminiConfig> {
        let config = GeminiConfig::builder()
            .api_key(api_key)
            .model(self.gemini.model)
            .base_url(self.gemini.base_url)
            .timeout_secs(self.gemini.timeout_secs)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build Gemini config: {}", e)))?;
        Ok(config)
    }
}
