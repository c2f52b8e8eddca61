//! Structured representation of a parsed traceback block.
//!
//! These types are transient: built per call, never persisted.

/// One call-site entry in a traceback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Source path exactly as printed in the traceback
    pub filename: String,

    /// Line number, or `UNKNOWN_LINE_NUMBER` when the token was not numeric
    pub line_number: i64,

    /// Enclosing function or scope name, trimmed
    pub scope_name: String,

    /// The code line printed under the frame header, trimmed
    pub source_line: Option<String>,

    /// Order of appearance in the block (0 = outermost call)
    pub position: usize,
}

impl Frame {
    /// Identity triple used for deduplication and fingerprinting
    ///
    /// **Public** - the source line and position are deliberately excluded
    pub fn key(&self) -> (&str, i64, &str) {
        (self.filename.as_str(), self.line_number, self.scope_name.as_str())
    }
}

/// Result of parsing one candidate traceback block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    /// Frames in textual order (ascending `position`)
    pub frames: Vec<Frame>,

    /// Exception messages in order of appearance, continuations folded in
    pub exception_lines: Vec<String>,

    /// The block split into lines, kept for debugging only
    pub raw_lines: Vec<String>,
}

impl ParsedBlock {
    /// Whether the block contained at least one frame
    pub fn is_traceback(&self) -> bool {
        !self.frames.is_empty()
    }

    /// The exception closest to the end of the block
    ///
    /// In a chained traceback the last reported exception is the one
    /// that actually escaped.
    pub fn primary_exception(&self) -> Option<&str> {
        self.exception_lines.last().map(String::as_str)
    }
}
