//! Ordered prompt parts.

use crate::InlineMedia;
use serde::{Deserialize, Serialize};

/// One element of the prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Inline binary attachment.
    Media(InlineMedia),
    /// Text content.
    Text(String),
}

impl Part {
    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::Media(_) => None,
        }
    }

    /// Returns the attachment if this is a media part.
    pub fn as_media(&self) -> Option<&InlineMedia> {
        match self {
            Part::Media(media) => Some(media),
            Part::Text(_) => None,
        }
    }
}

/// The part sequence of a single request.
///
/// Holds at most one media part, always ahead of exactly one text part. The
/// fields are private so that ordering cannot be broken after construction.
///
/// # Examples
///
/// ```
/// use viralcopy_core::{InlineMedia, Part, PromptParts};
///
/// let parts = PromptParts::new(Some(InlineMedia::new("image/png", "AAAA")), "hello");
/// assert_eq!(parts.part_count(), 2);
/// assert!(matches!(parts.iter().next(), Some(Part::Media(_))));
/// assert_eq!(parts.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptParts {
    media: Option<InlineMedia>,
    text: String,
}

impl PromptParts {
    /// Creates the part sequence: the media part (if any) followed by the text.
    pub fn new(media: Option<InlineMedia>, text: impl Into<String>) -> Self {
        Self {
            media,
            text: text.into(),
        }
    }

    /// The media attachment, if present.
    pub fn media(&self) -> Option<&InlineMedia> {
        self.media.as_ref()
    }

    /// The text part.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of parts (1 or 2).
    pub fn part_count(&self) -> usize {
        if self.media.is_some() { 2 } else { 1 }
    }

    /// Iterates parts in send order.
    pub fn iter(&self) -> impl Iterator<Item = Part> + '_ {
        self.media
            .iter()
            .cloned()
            .map(Part::Media)
            .chain(std::iter::once(Part::Text(self.text.clone())))
    }

    /// Consumes the sequence and returns its parts in send order.
    pub fn into_parts(self) -> Vec<Part> {
        let mut parts = Vec::with_capacity(2);
        if let Some(media) = self.media {
            parts.push(Part::Media(media));
        }
        parts.push(Part::Text(self.text));
        parts
    }
}
