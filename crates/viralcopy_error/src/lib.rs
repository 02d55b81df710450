//! Error types for the viralcopy workspace.
//!
//! Every error records the file and line where it was created. The two
//! outcomes a generation call can fail with are [`ConfigError`] (detected
//! before any I/O) and [`GeminiError`] (anything the remote call surfaced).

mod config;
mod gemini;
mod io;
mod json;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use io::IoError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ViralCopyErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Remote Gemini call error
    Gemini(GeminiError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// File or stream error
    Io(IoError),
}

impl std::fmt::Display for ViralCopyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViralCopyErrorKind::Config(e) => write!(f, "{}", e),
            ViralCopyErrorKind::Gemini(e) => write!(f, "{}", e),
            ViralCopyErrorKind::Json(e) => write!(f, "{}", e),
            ViralCopyErrorKind::Io(e) => write!(f, "{}", e),
        }
    }
}

/// viralcopy error with kind discrimination.
///
/// # Examples
///
/// ```
/// use viralcopy_error::{ConfigError, ViralCopyError, ViralCopyErrorKind};
///
/// let err = ViralCopyError::from(ConfigError::new("API Key not found"));
/// assert!(err.is_config());
/// assert!(matches!(err.kind(), ViralCopyErrorKind::Config(_)));
/// ```
#[derive(Debug)]
pub struct ViralCopyError(Box<ViralCopyErrorKind>);

impl ViralCopyError {
    /// Create a new error from a kind.
    pub fn new(kind: ViralCopyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ViralCopyErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> ViralCopyErrorKind {
        *self.0
    }

    /// True when the error was raised before any network activity.
    pub fn is_config(&self) -> bool {
        matches!(*self.0, ViralCopyErrorKind::Config(_))
    }

    /// The remote call error, if this error came from the Gemini API.
    pub fn as_gemini(&self) -> Option<&GeminiError> {
        match &*self.0 {
            ViralCopyErrorKind::Gemini(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for ViralCopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ViralCopy Error: {}", self.0)
    }
}

impl std::error::Error for ViralCopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.0 {
            ViralCopyErrorKind::Config(e) => Some(e),
            ViralCopyErrorKind::Gemini(e) => Some(e),
            ViralCopyErrorKind::Json(e) => Some(e),
            ViralCopyErrorKind::Io(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to ViralCopyErrorKind
impl<T> From<T> for ViralCopyError
where
    T: Into<ViralCopyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for viralcopy operations.
pub type ViralCopyResult<T> = std::result::Result<T, ViralCopyError>;
