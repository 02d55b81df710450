//! Google Gemini backend.
//!
//! [`CopyGenerationClient`] assembles the request from a
//! [`GenerationRequest`](viralcopy_core::GenerationRequest), hands it to a
//! [`GeminiTransport`], and returns the model's JSON text.

mod client;
mod config;
mod conversions;
mod dto;
mod transport;

pub use client::{CopyGenerationClient, EMPTY_RESULT};
pub use config::{API_KEY_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use conversions::{TEMPERATURE, to_generate_request, to_wire_part};
pub use dto::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, InlineData, PromptFeedback, ResponsePart, UsageMetadata, WirePart,
};
pub use transport::{GeminiTransport, ReqwestTransport};
