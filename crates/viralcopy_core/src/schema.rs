//! Response schema sent with every request.
//!
//! The schema uses the Gemini `Schema` type names (`OBJECT`, `ARRAY`,
//! `STRING`, `INTEGER`). Counts and character lengths live in the field
//! descriptions only; the service does not enforce them.

use serde_json::{Value, json};
use std::sync::LazyLock;

/// Required top-level fields, in declaration order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "trendAnalysis",
    "visualKeywords",
    "options",
    "footerCopy",
    "editingGuide",
    "tags",
];

static OUTPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "trendAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "matchScore": {
                        "type": "STRING",
                        "description": "Composite score of Compliance Safety + Audience Match (e.g., '92%')."
                    },
                    "content": {
                        "type": "STRING",
                        "description": "Dual Audit Report in CHINESE: 1. Compliance risks (Keywords). 2. Deep psychological match for Women 30-50."
                    }
                },
                "required": ["matchScore", "content"]
            },
            "visualKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "5-8 visual keywords extracted from frames in CHINESE (e.g., '暖光', '泪眼')."
            },
            "options": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "viralScore": { "type": "STRING" },
                        "titleTop": {
                            "type": "STRING",
                            "description": "Line 1 (Visual Hook): High contrast, shocking or intriguing. Optimized for 9:16 screen width (avoid wrapping). E.g., 'Flashy', 'Question', 'Conflict'."
                        },
                        "titleMiddle": {
                            "type": "STRING",
                            "description": "Line 2 (Core Fact): The substance/context. Information dense. Balanced width with Line 1."
                        },
                        "titleBottom": {
                            "type": "STRING",
                            "description": "Line 3 (Emotional Anchor): Short, punchy, resonant. The 'soul' of the copy."
                        },
                        "tickerSegments": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "3 short news-style lower thirds / visual anchors."
                        },
                        "longTicker": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "3 segments of 'Anchor Commentary'. Seg 1: The Phenomenon (Hook). Seg 2: The Deep Analysis (Truth). Seg 3: The Sublimation (Value). Each segment MUST be STRICTLY 50-55 Chinese characters."
                        }
                    },
                    "required": [
                        "id",
                        "viralScore",
                        "titleTop",
                        "titleMiddle",
                        "titleBottom",
                        "tickerSegments",
                        "longTicker"
                    ]
                }
            },
            "footerCopy": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 lines of high-engagement comment section interaction starters in CHINESE."
            },
            "editingGuide": {
                "type": "OBJECT",
                "properties": {
                    "pace": { "type": "STRING", "description": "Editing rhythm advice in CHINESE." },
                    "opening": { "type": "STRING", "description": "First 3 seconds hook strategy in CHINESE." },
                    "bgm": {
                        "type": "STRING",
                        "description": "Specific music style AND volume curve in CHINESE (e.g., '人声100%, BGM 15%')."
                    },
                    "visuals": {
                        "type": "STRING",
                        "description": "Color grading (e.g., '低饱和, +10 锐度') and layout in CHINESE."
                    },
                    "steps": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Step-by-step CapCut/Jianying instructions in CHINESE."
                    }
                },
                "required": ["pace", "opening", "bgm", "visuals", "steps"]
            },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "10 Mixed tags in CHINESE: Niche + Traffic + Long-tail."
            }
        },
        "required": REQUIRED_FIELDS
    })
});

/// The fixed response schema. Built once; every call sees the same value.
///
/// # Examples
///
/// ```
/// let schema = viralcopy_core::output_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"].as_array().map(Vec::len), Some(6));
/// ```
pub fn output_schema() -> &'static Value {
    &OUTPUT_SCHEMA
}
