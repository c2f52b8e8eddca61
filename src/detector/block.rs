//! Traceback block detection and in-place substitution.
//!
//! A block is:
//! 1. The `Traceback (most recent call last):` header
//! 2. One or more indented `File "...", line N, in scope` headers, each
//!    optionally followed by one indented source line
//! 3. Any further indented lines (caret markers and the like)
//! 4. A terminal exception line, consumed up to (not including) its line break
//!
//! The terminal line is the first exception-shaped line after the last frame
//! header that sits left of that header. Anything after it stays untouched.

use crate::parser::is_frame_header;
use crate::utils::config::COMPACT_OPEN_TAG;
use log::debug;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Shape of the line that closes a traceback
const TERMINAL_LINE: &str =
    r#"[ \t]*(?:[^\s"][^"\r\n]*?(?:Error|Exception|Warning)[^\r\n]*|[A-Za-z_][\w.]*:[^\r\n]*)"#;

static TRACEBACK_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [
        // header
        r"Traceback\s*\(most\s+recent\s+call\s+last\):\r?\n",
        // frame groups, each with an optional source line
        r#"(?:[ \t]+File[ \t]+"[^"\r\n]+",[ \t]+line[ \t]+[^,\s]+,[ \t]+in[ \t]+[^\r\n]*\r?\n"#,
        r"(?:[ \t]+[^\r\n]*\r?\n)?)+",
        // trailing indented lines
        r"(?:[ \t]+[^\r\n]*\r?\n)*",
        // terminal exception line
        TERMINAL_LINE,
    ]
    .concat();
    Regex::new(&pattern).expect("TRACEBACK_BLOCK_RE regex should compile")
});

static TERMINAL_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", TERMINAL_LINE)).expect("TERMINAL_LINE_RE regex should compile")
});

/// Replace every traceback block in `text` with `replacer(block)`
///
/// **Public** - main entry point for detection
///
/// # Arguments
/// * `text` - Arbitrary text, possibly containing tracebacks
/// * `replacer` - Called once per detected block with the block's exact text
///
/// # Returns
/// The text with each block substituted. Text outside blocks is preserved
/// byte for byte. If `text` already contains a compact summary it is
/// returned unchanged and `replacer` is never called.
pub fn detect_and_replace<F>(text: &str, mut replacer: F) -> String
where
    F: FnMut(&str) -> String,
{
    if contains_compact_block(text) {
        debug!("Input already contains a compact summary, skipping");
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    for range in block_ranges(text) {
        output.push_str(&text[copied..range.start]);
        output.push_str(&replacer(&text[range.clone()]));
        copied = range.end;
    }
    output.push_str(&text[copied..]);

    output
}

/// Whether `text` already holds a compact summary tag
///
/// **Public** - the idempotence sentinel check
pub fn contains_compact_block(text: &str) -> bool {
    text.contains(COMPACT_OPEN_TAG)
}

/// Byte ranges of every traceback block in `text`
///
/// **Private** - each regex match is cut back to its terminal line and the
/// next search resumes right after it
fn block_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    while let Some(found) = TRACEBACK_BLOCK_RE.find_at(text, start) {
        let end = found.start() + block_end(found.as_str());
        ranges.push(found.start()..end);
        start = end;
    }

    ranges
}

/// Length of `block` up to the end of its terminal line
///
/// **Private** - falls back to the whole match when no line after the last
/// frame header is both exception-shaped and indented less than that header
fn block_end(block: &str) -> usize {
    let mut offset = 0;
    let mut frame_indent: Option<usize> = None;
    let mut end: Option<usize> = None;

    for line in block.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        let indent = content.len() - content.trim_start_matches([' ', '\t']).len();

        if is_frame_header(content) {
            frame_indent = Some(indent);
            end = None;
        } else if let Some(limit) = frame_indent {
            if end.is_none() && indent < limit && TERMINAL_LINE_RE.is_match(content) {
                end = Some(offset + content.len());
            }
        }

        offset += line.len();
    }

    end.unwrap_or(block.len())
}
