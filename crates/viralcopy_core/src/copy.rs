//! Typed view of the generated copy.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use viralcopy_error::{JsonError, ViralCopyResult};

/// Compliance and audience-fit audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    /// Composite score, e.g. "92%"
    match_score: String,
    /// Audit report text
    content: String,
}

/// One of the copy variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct CopyOption {
    /// Option number
    id: i64,
    /// Predicted reach, free-form
    viral_score: String,
    /// Title line 1 (hook)
    title_top: String,
    /// Title line 2 (core fact)
    title_middle: String,
    /// Title line 3 (emotional anchor)
    title_bottom: String,
    /// Short lower-third captions
    ticker_segments: Vec<String>,
    /// Commentary segments: phenomenon, analysis, sublimation
    long_ticker: Vec<String>,
}

/// Editing advice for the cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct EditingGuide {
    /// Rhythm advice
    pace: String,
    /// First three seconds
    opening: String,
    /// Music style and volume curve
    bgm: String,
    /// Color grading and layout
    visuals: String,
    /// Step-by-step editor instructions
    steps: Vec<String>,
}

/// The full structured response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCopy {
    /// Audit of the submitted content
    trend_analysis: TrendAnalysis,
    /// Visual keywords pulled from the frames
    visual_keywords: Vec<String>,
    /// Copy variants
    options: Vec<CopyOption>,
    /// Comment-section starters
    footer_copy: Vec<String>,
    /// Editing advice
    editing_guide: EditingGuide,
    /// Hashtags
    tags: Vec<String>,
}

impl GeneratedCopy {
    /// Parses the raw JSON text returned by the model.
    ///
    /// A missing required field is an error. The `"{}"` fallback for an
    /// empty response therefore fails to parse.
    pub fn from_json(text: &str) -> ViralCopyResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            tracing::debug!(error = %e, "Generated copy did not match the response schema");
            JsonError::new(format!("Failed to parse generated copy: {}", e)).into()
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A response that satisfies every count and length expectation.
    pub fn conforming_json() -> String {
        // 52 characters each
        let segment = "这是一段用于测试的长字幕评论内容，它的长度被精确地控制在五十二个汉字左右，以便验证长度规则是否生效好的吧";
        let option = |id: i64| {
            serde_json::json!({
                "id": id,
                "viralScore": "95%",
                "titleTop": "为什么越懂事的女人越苦？",
                "titleMiddle": "心理学家揭秘讨好型人格真相",
                "titleBottom": "别再委屈自己",
                "tickerSegments": ["现象", "真相", "价值"],
                "longTicker": [segment, segment, segment]
            })
        };
        serde_json::json!({
            "trendAnalysis": { "matchScore": "92%", "content": "合规无风险" },
            "visualKeywords": ["暖光", "泪眼", "厨房", "深夜", "背影"],
            "options": [option(1), option(2), option(3)],
            "footerCopy": ["你经历过吗？", "评论区聊聊", "转给她"],
            "editingGuide": {
                "pace": "慢",
                "opening": "特写",
                "bgm": "人声100%, BGM 15%",
                "visuals": "低饱和, +10 锐度",
                "steps": ["导入", "调色", "导出"]
            },
            "tags": ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
        })
        .to_string()
    }
}
