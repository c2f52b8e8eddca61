//! JSON preview payload for the CLI.
//!
//! Instead of the full rewritten text, `--json` emits a small structured
//! object with truncated previews and a frame count.

use crate::parser::parse;
use crate::utils::config::PREVIEW_CHARS;
use log::debug;
use serde::Serialize;

/// Structured summary of one rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactReport {
    /// First `PREVIEW_CHARS` characters of the input
    pub original_preview: String,

    /// First `PREVIEW_CHARS` characters of the rewritten text
    pub compacted_preview: String,

    /// Frames the parser still finds in the rewritten text
    pub frames_found: usize,
}

impl CompactReport {
    /// Build a report from the original and rewritten text
    ///
    /// **Public** - used by the compact command
    pub fn new(original: &str, compacted: &str) -> Self {
        let frames_found = parse(compacted).frames.len();
        debug!("Report: {} frames left after compaction", frames_found);

        Self {
            original_preview: preview(original, PREVIEW_CHARS),
            compacted_preview: preview(compacted, PREVIEW_CHARS),
            frames_found,
        }
    }
}

/// Serialize a report as pretty-printed JSON
///
/// **Public** - output of `--json`
pub fn report_to_string(report: &CompactReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// First `max_chars` characters of `text`, never splitting a character
///
/// **Private** - internal utility
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
