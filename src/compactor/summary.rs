//! Compact summary model and its tagged text rendering.
//!
//! Format:
//!
//! ```text
//! <COMPACT_PY_TRACEBACK fingerprint=0123456789>
//! Exception: ValueError: bad input
//!
//! Relevant frames:
//! - app.py:12 in handle → parse(data)
//! - parser.py:40 in parse
//! </COMPACT_PY_TRACEBACK>
//! ```

use crate::parser::Frame;
use crate::utils::config::{
    COMPACT_CLOSE_TAG, COMPACT_OPEN_TAG, SOURCE_ARROW, UNKNOWN_EXCEPTION, UNKNOWN_NAME,
};
use std::fmt;

/// Rendered replacement for one traceback block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactSummary {
    /// Short hex digest of the selected frames
    pub fingerprint: String,

    /// Last exception line in the block, if any
    pub primary_exception: Option<String>,

    /// Selected frames in textual order
    pub selected_frames: Vec<Frame>,
}

impl CompactSummary {
    /// Render the summary as tagged text
    ///
    /// **Public** - same output as the `Display` impl
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompactSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} fingerprint={}>", COMPACT_OPEN_TAG, self.fingerprint)?;
        writeln!(
            f,
            "Exception: {}",
            self.primary_exception.as_deref().unwrap_or(UNKNOWN_EXCEPTION)
        )?;
        writeln!(f)?;
        writeln!(f, "Relevant frames:")?;

        for frame in &self.selected_frames {
            let scope = if frame.scope_name.is_empty() {
                UNKNOWN_NAME
            } else {
                frame.scope_name.as_str()
            };
            write!(
                f,
                "- {}:{} in {}",
                base_name(&frame.filename),
                frame.line_number,
                scope
            )?;
            if let Some(source) = frame.source_line.as_deref().filter(|s| !s.is_empty()) {
                write!(f, " {} {}", SOURCE_ARROW, source)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", COMPACT_CLOSE_TAG)
    }
}

/// Last path segment of a traceback filename
///
/// **Public** - directories are stripped for both `/` and `\` separators
pub fn base_name(filename: &str) -> &str {
    if filename.is_empty() {
        return UNKNOWN_NAME;
    }
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
}
