//! Post-response checks against the counts and lengths the prompt asks for.
//!
//! The response schema only fixes the shape. The model is told how many
//! keywords, options, tags and so on to produce, and how long each long
//! ticker segment must be, but nothing enforces it. [`validate_copy`] reports
//! deviations as warnings and leaves the decision to the caller.

use crate::{CopyOption, GeneratedCopy};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Expected number of visual keywords.
pub const VISUAL_KEYWORDS: RangeInclusive<usize> = 5..=8;
/// Expected number of copy options.
pub const OPTION_COUNT: usize = 3;
/// Expected number of short ticker segments per option.
pub const TICKER_SEGMENT_COUNT: usize = 3;
/// Expected number of long ticker segments per option.
pub const LONG_TICKER_COUNT: usize = 3;
/// Allowed length of each long ticker segment, in characters.
pub const LONG_TICKER_CHARS: RangeInclusive<usize> = 50..=55;
/// Expected number of footer lines.
pub const FOOTER_COUNT: usize = 3;
/// Expected number of tags.
pub const TAG_COUNT: usize = 10;

/// What a warning is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarningKind {
    /// A list has the wrong number of entries.
    #[display("{field}: expected {expected} entries, got {actual}")]
    CountMismatch {
        /// JSON path of the list
        field: String,
        /// Human-readable expectation, e.g. "3" or "5-8"
        expected: String,
        /// Entries found
        actual: usize,
    },
    /// A long ticker segment is outside the allowed character range.
    #[display("option {option_id} longTicker[{segment}]: {chars} characters, expected 50-55")]
    TickerLength {
        /// `id` of the option
        option_id: i64,
        /// Zero-based segment index
        segment: usize,
        /// Characters counted
        chars: usize,
    },
}

/// A single deviation from the requested format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("{kind}")]
pub struct ValidationWarning {
    /// What was wrong
    pub kind: ValidationWarningKind,
}

impl From<ValidationWarningKind> for ValidationWarning {
    fn from(kind: ValidationWarningKind) -> Self {
        Self { kind }
    }
}

/// Result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Deviations found, in document order
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn count(&mut self, field: impl Into<String>, expected: usize, actual: usize) {
        if expected != actual {
            self.push(ValidationWarningKind::CountMismatch {
                field: field.into(),
                expected: expected.to_string(),
                actual,
            });
        }
    }

    fn count_range(
        &mut self,
        field: impl Into<String>,
        expected: &RangeInclusive<usize>,
        actual: usize,
    ) {
        if !expected.contains(&actual) {
            self.push(ValidationWarningKind::CountMismatch {
                field: field.into(),
                expected: format!("{}-{}", expected.start(), expected.end()),
                actual,
            });
        }
    }

    fn push(&mut self, kind: ValidationWarningKind) {
        self.warnings.push(kind.into());
    }
}

/// Checks a parsed response against the counts and lengths in the prompt.
///
/// Never fails; an empty report means the response conforms.
#[tracing::instrument(skip_all, fields(options = copy.options().len()))]
pub fn validate_copy(copy: &GeneratedCopy) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.count_range("visualKeywords", &VISUAL_KEYWORDS, copy.visual_keywords().len());
    report.count("options", OPTION_COUNT, copy.options().len());
    for (index, option) in copy.options().iter().enumerate() {
        validate_option(&mut report, index, option);
    }
    report.count("footerCopy", FOOTER_COUNT, copy.footer_copy().len());
    report.count("tags", TAG_COUNT, copy.tags().len());

    tracing::debug!(warnings = report.warnings.len(), "Validated generated copy");
    report
}

fn validate_option(report: &mut ValidationReport, index: usize, option: &CopyOption) {
    report.count(
        format!("options[{index}].tickerSegments"),
        TICKER_SEGMENT_COUNT,
        option.ticker_segments().len(),
    );
    report.count(
        format!("options[{index}].longTicker"),
        LONG_TICKER_COUNT,
        option.long_ticker().len(),
    );

    for (segment, text) in option.long_ticker().iter().enumerate() {
        let chars = text.trim().chars().count();
        if !LONG_TICKER_CHARS.contains(&chars) {
            report.push(ValidationWarningKind::TickerLength {
                option_id: *option.id(),
                segment,
                chars,
            });
        }
    }
}
