//! Core data types for the viralcopy Gemini copy generator.
//!
//! This crate owns everything about a generation call that does not touch
//! the network: the caller's request, the ordered prompt parts, the fixed
//! system instruction and response schema, and the typed view of the
//! returned JSON.

#![recursion_limit = "256"]

mod copy;
mod media;
mod part;
mod prompt;
mod request;
mod schema;
mod validation;

pub use copy::{CopyOption, EditingGuide, GeneratedCopy, TrendAnalysis};
pub use media::InlineMedia;
pub use part::{Part, PromptParts};
pub use prompt::{
    DEFAULT_CONTENT, EVOLUTION_MARKER, SYSTEM_INSTRUCTION, build_prompt_text, evolution_block,
};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use schema::{REQUIRED_FIELDS, output_schema};
pub use validation::{
    FOOTER_COUNT, LONG_TICKER_CHARS, LONG_TICKER_COUNT, OPTION_COUNT, TAG_COUNT,
    TICKER_SEGMENT_COUNT, VISUAL_KEYWORDS, ValidationReport, ValidationWarning,
    ValidationWarningKind, validate_copy,
};
