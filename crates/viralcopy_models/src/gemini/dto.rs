//! Wire types for the Gemini `generateContent` endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; always a single user turn here
    contents: Vec<Content>,
    /// Persona and output rules
    system_instruction: Content,
    /// Sampling and response format
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a request from its three sections.
    pub fn new(
        contents: Vec<Content>,
        system_instruction: Content,
        generation_config: GenerationConfig,
    ) -> Self {
        Self {
            contents,
            system_instruction,
            generation_config,
        }
    }
}

/// A turn of content made of ordered parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// "user" for prompts, absent for the system instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Parts in send order
    parts: Vec<WirePart>,
}

impl Content {
    /// A user turn.
    pub fn user(parts: Vec<WirePart>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// A role-less text block, as used for the system instruction.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![WirePart::Text { text: text.into() }],
        }
    }
}

/// A request part: inline binary data or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePart {
    /// Base64 attachment
    InlineData {
        /// MIME type and payload
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Text
    Text {
        /// Text content
        text: String,
    },
}

/// Inline attachment payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Declared MIME type
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always "application/json"
    response_mime_type: String,
    /// Schema the JSON must follow
    response_schema: Value,
    /// Sampling temperature
    temperature: f64,
}

impl GenerationConfig {
    /// JSON output constrained by `schema`.
    pub fn json(schema: Value, temperature: f64) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
            temperature,
        }
    }
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions, first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt was blocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token accounting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// A response with one candidate holding `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    role: Some("model".to_string()),
                    parts: vec![ResponsePart {
                        text: Some(text.into()),
                        thought: None,
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            ..Default::default()
        }
    }

    /// Text of the first candidate, skipping thought parts.
    ///
    /// Returns `None` when there is no candidate, no text part, or the text
    /// is empty.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| !part.thought.unwrap_or(false))
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when the candidate was filtered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Usually "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Response parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on thinking-model reasoning parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Why a prompt was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason, e.g. "SAFETY"
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u64>,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: Option<u64>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u64>,
}
