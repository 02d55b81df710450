//! Caller-facing generation request.

use crate::{InlineMedia, PromptParts, build_prompt_text};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the caller supplies for one generation call.
///
/// # Examples
///
/// ```
/// use viralcopy_core::{GenerationRequest, InlineMedia};
///
/// let request = GenerationRequest::builder()
///     .content("深夜加班的妈妈")
///     .media(Some(InlineMedia::new("image/jpeg", "/9j/4AAQ")))
///     .evolution_history(vec!["标题太长".to_string()])
///     .build()
///     .expect("valid request");
///
/// assert_eq!(request.prompt_parts().part_count(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Free text content; empty means "work from the visuals"
    #[serde(default)]
    content: String,
    /// Optional single inline attachment
    #[serde(default)]
    media: Option<InlineMedia>,
    /// Prior feedback notes, oldest first
    #[serde(default)]
    evolution_history: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request from its three inputs.
    pub fn new(
        content: impl Into<String>,
        media: Option<InlineMedia>,
        evolution_history: Vec<String>,
    ) -> Self {
        Self {
            content: content.into(),
            media,
            evolution_history,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Assembles the ordered parts sent to the model.
    pub fn prompt_parts(&self) -> PromptParts {
        let text = build_prompt_text(&self.content, &self.evolution_history);
        PromptParts::new(self.media.clone(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EVOLUTION_MARKER, Part};

    #[test]
    fn test_default_request_is_text_only() {
        let parts = GenerationRequest::default().prompt_parts();
        assert_eq!(parts.part_count(), 1);
        assert!(parts.media().is_none());
        assert!(!parts.text().contains(EVOLUTION_MARKER));
    }

    #[test]
    fn test_history_flows_into_text_part() {
        let request = GenerationRequest::new(
            "script",
            None,
            vec!["opening too slow".to_string(), "use more contrast".to_string()],
        );
        let parts = request.prompt_parts().into_parts();
        let Some(Part::Text(text)) = parts.last() else {
            panic!("last part must be text");
        };
        assert!(text.contains(&format!(
            "{}\nopening too slow\nuse more contrast",
            EVOLUTION_MARKER
        )));
    }

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"content":"x","media":{"mimeType":"image/png","data":"AAAA"}}"#,
        )
        .expect("valid json");
        assert_eq!(request.media().as_ref().map(|m| m.mime_type().as_str()), Some("image/png"));
        assert!(request.evolution_history().is_empty());
    }
}
