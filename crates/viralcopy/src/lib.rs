//! Generate short-video marketing copy with Gemini.
//!
//! One call sends a script and/or a frame to the model together with a fixed
//! persona, a strict JSON response schema and any prior feedback, and returns
//! the model's JSON text unchanged.
//!
//! ```no_run
//! use viralcopy::{CopyGenerationClient, GeminiConfig, GenerationRequest};
//!
//! # async fn run() -> viralcopy::ViralCopyResult<()> {
//! let client = CopyGenerationClient::new(GeminiConfig::from_env())?;
//! let request = GenerationRequest::new("孩子第一次独自上学", None, vec![]);
//! let json = client.generate_request(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod settings;

pub use settings::{DEFAULT_SETTINGS_FILE, GeminiSettings, ViralCopySettings};
pub use viralcopy_core::*;
pub use viralcopy_error::*;
pub use viralcopy_models::*;
