//! Type conversions between viralcopy requests and Gemini wire format.

use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, InlineData, WirePart};
use viralcopy_core::{GenerationRequest, Part, SYSTEM_INSTRUCTION, output_schema};

/// Sampling temperature for every call. Low enough to keep the copy stable.
pub const TEMPERATURE: f64 = 0.7;

/// Converts a prompt part to its wire form.
pub fn to_wire_part(part: Part) -> WirePart {
    match part {
        Part::Media(media) => WirePart::InlineData {
            inline_data: InlineData {
                mime_type: media.mime_type().clone(),
                data: media.data().clone(),
            },
        },
        Part::Text(text) => WirePart::Text { text },
    }
}

/// Converts a generation request to a `generateContent` body.
///
/// The system instruction, schema and temperature are the same for every
/// request; only the user turn varies.
pub fn to_generate_request(req: &GenerationRequest) -> GenerateContentRequest {
    let parts = req
        .prompt_parts()
        .into_parts()
        .into_iter()
        .map(to_wire_part)
        .collect();

    GenerateContentRequest::new(
        vec![Content::user(parts)],
        Content::text(SYSTEM_INSTRUCTION),
        GenerationConfig::json(output_schema().clone(), TEMPERATURE),
    )
}
