//! Prompt assembly for the copy generation call.
//!
//! The model receives one text part per request. It is assembled from the
//! caller's content, the optional evolution block and a fixed task
//! description.

/// Substituted for empty caller content so the model works from the media alone.
pub const DEFAULT_CONTENT: &str = "Analyze the video visuals directly.";

/// Header line of the evolution block.
pub const EVOLUTION_MARKER: &str = "[ALGORITHM EVOLUTION DATA - ADJUST BASED ON FEEDBACK]:";

/// Persona, tone and output rules sent as the system instruction.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are the **Douyin Viral Algorithm Architect V4.0 (Rong-Media Ultimate)**.
Your core expertise is creating **News-Grade / Deep-Dive Social Commentary** content for **Women aged 30-50**.
You MUST Output strictly in **Simplified Chinese** (Simplified Chinese).

**CORE PROTOCOLS:**

1.  **DEEP ANALYSIS (Context Tree)**:
    - Analyze every frame/sentence. Do not hallucinate.
    - **Tone**: **News Commentary / Social Observation** (Rational, Insightful, Empathetic).
    - **Target**: Hit pain points (Parenting anxiety, Marriage reality, Self-growth) with dignity and depth.

2.  **VISUAL HIERARCHY (9:16 Golden Ratio)**:
    - Do not count characters rigidly. Instead, focus on **Visual Weight** and **Readability** on a phone screen.
    - **Line 1 (The Hook)**: Big, Bold, Impactful. Must fit on one line without cramping. (e.g. "为什么越懂事的女人越苦？")
    - **Line 2 (The Core)**: Stabilizing, Informative. (e.g. "心理学家揭秘讨好型人格真相")
    - **Line 3 (The Anchor)**: Emotional, Short, Punchy. (e.g. "别再委屈自己")
    - **Layout Logic**: The 3 lines should form an inverted pyramid or a stable block. Ensure the visual center of gravity is balanced.

3.  **LONG TICKER (Deep Commentary)**:
    - Structure: **Phase 1 (The Hook/Phenomenon)** -> **Phase 2 (The Analysis/Truth)** -> **Phase 3 (The Sublimation/Value)**.
    - **LENGTH**: Each segment must be **STRICTLY 50-55 Chinese characters**. Count them.

**OUTPUT LOGIC**:
- **Trend Analysis**: Combine "Compliance Audit" (Safety Check) + "Audience Match" (Psychology Profile).
- **Options**:
    - Option 1: **Social Observation** (News Angle).
    - Option 2: **Emotional Resonance** (Deep Dive).
    - Option 3: **Suspense/Contrast** (Storytelling).

Return ONLY valid JSON matching the provided schema.
"#;

const TASK_DESCRIPTION: &str = r#"
  Task: Generate 3 Viral Strategy Options (News/Commentary Style).

  CRITICAL CONSTRAINTS:
  1. **3-Line Title Stack**: Optimize for 9:16 Vertical Screen.
     - Focus on visual impact and hierarchy (Hook -> Core -> Emotion).
     - No strict character count, but ensure it fits comfortably on screen (approx 8-14 chars is usually best, but prioritize meaning).
  2. **LongTicker segments**: STRICTLY 50-55 chars each.
"#;

/// Builds the evolution block from prior feedback notes.
///
/// Returns `None` for an empty history. Otherwise the block is the marker
/// line followed by each note, in order, joined with newlines.
///
/// # Examples
///
/// ```
/// use viralcopy_core::{EVOLUTION_MARKER, evolution_block};
///
/// assert!(evolution_block::<&str>(&[]).is_none());
///
/// let history = vec!["too long".to_string(), "more hooks".to_string()];
/// let block = evolution_block(&history).unwrap();
/// assert!(block.contains(EVOLUTION_MARKER));
/// assert!(block.contains("too long\nmore hooks"));
/// ```
pub fn evolution_block<S: AsRef<str>>(history: &[S]) -> Option<String> {
    if history.is_empty() {
        return None;
    }

    let notes = history
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!("\n{}\n{}\n", EVOLUTION_MARKER, notes))
}

/// Builds the single text part of the request.
#[tracing::instrument(skip_all, fields(content_len = content.len(), history_len = history.len()))]
pub fn build_prompt_text<S: AsRef<str>>(content: &str, history: &[S]) -> String {
    let content = if content.is_empty() {
        DEFAULT_CONTENT
    } else {
        content
    };
    let memory = evolution_block(history).unwrap_or_default();

    let text = format!(
        "\n  Analyze this content for Douyin/TikTok (Target: Women 30-50).\n  \
         OUTPUT LANGUAGE: SIMPLIFIED CHINESE ONLY.\n\n  \
         User Context/Script: \"{}\"\n  {}\n{}",
        content, memory, TASK_DESCRIPTION
    );

    tracing::debug!(prompt_len = text.len(), "Assembled prompt text");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_HISTORY: [&str; 0] = [];

    #[test]
    fn test_empty_content_uses_default() {
        let text = build_prompt_text("", &NO_HISTORY);
        assert!(text.contains(&format!("\"{}\"", DEFAULT_CONTENT)));
    }

    #[test]
    fn test_content_is_quoted_verbatim() {
        let text = build_prompt_text("妈妈的一天", &NO_HISTORY);
        assert!(text.contains("User Context/Script: \"妈妈的一天\""));
        assert!(!text.contains(DEFAULT_CONTENT));
    }

    #[test]
    fn test_no_marker_without_history() {
        let text = build_prompt_text("content", &NO_HISTORY);
        assert!(!text.contains(EVOLUTION_MARKER));
    }

    #[test]
    fn test_empty_history_has_no_block() {
        assert_eq!(evolution_block::<&str>(&[]), None);
        assert_eq!(evolution_block(&Vec::<String>::new()), None);
    }

    #[test]
    fn test_history_entries_in_order() {
        let history = ["first note", "second note", "third note"];
        let text = build_prompt_text("content", &history);

        let marker_at = text.find(EVOLUTION_MARKER).expect("marker present");
        let block = &text[marker_at..];
        assert!(block.contains("first note\nsecond note\nthird note"));
    }

    #[test]
    fn test_task_description_always_present() {
        let text = build_prompt_text("", &["note"]);
        assert!(text.contains("Generate 3 Viral Strategy Options"));
        assert!(text.contains("STRICTLY 50-55 chars each"));
        assert!(text.ends_with(TASK_DESCRIPTION));
    }
}
