//! Client configuration.

use derive_getters::Getters;

/// Default model for copy generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Settings injected into [`CopyGenerationClient`](crate::CopyGenerationClient).
///
/// The API key is optional here so that a missing key surfaces as a
/// configuration error at call time rather than at construction.
///
/// # Examples
///
/// ```
/// use viralcopy_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .api_key(Some("test-key".to_string()))
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// assert!(!format!("{:?}", config).contains("test-key"));
/// ```
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL up to and including the API version
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Whole-request timeout; none by default
    #[builder(default)]
    timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Creates a builder for `GeminiConfig`.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Default settings with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Default settings with the key read from `GEMINI_API_KEY`, falling back
    /// to `API_KEY`. A missing key is recorded as `None`.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|var| std::env::var(var).ok());
        tracing::debug!(
            api_key_present = config.api_key.is_some(),
            "Loaded Gemini config from environment"
        );
        config
    }

    /// Resolves the key through `lookup`, skipping variables that are unset
    /// or blank.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .copied()
            .find_map(|var| lookup(var).filter(|key| !key.trim().is_empty()));

        Self {
            api_key,
            ..Self::default()
        }
    }

    /// The API key, if present and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Returns a copy with a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
