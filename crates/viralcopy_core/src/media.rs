//! Inline media attachments.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A base64-encoded binary attachment (image or video frame) sent inline with
/// the prompt.
///
/// # Examples
///
/// ```
/// use viralcopy_core::InlineMedia;
///
/// let media = InlineMedia::from_bytes("image/png", b"\x89PNG");
/// assert_eq!(media.mime_type(), "image/png");
/// assert_eq!(media.data(), "iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineMedia {
    /// Declared MIME type, e.g. "image/jpeg" or "video/mp4"
    mime_type: String,
    /// Base64 payload (standard alphabet, padded)
    data: String,
}

impl InlineMedia {
    /// Wraps an already-encoded base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encodes raw bytes with the standard base64 alphabet.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Size of the base64 payload in bytes.
    pub fn encoded_len(&self) -> usize {
        self.data.len()
    }
}
