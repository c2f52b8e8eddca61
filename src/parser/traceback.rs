//! Line-oriented parser for Python tracebacks.
//!
//! Extracts frames and exception lines from a single candidate block.
//! The parser never fails: malformed numbers degrade to a sentinel and
//! unrecognized lines are skipped.

use super::schema::{Frame, ParsedBlock};
use crate::utils::config::UNKNOWN_LINE_NUMBER;
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// Frame header: `File "<path>", line <n>, in <scope>`
static FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"File\s+"(.+?)",\s+line\s+([^,\s]+),\s+in\s+(.+)"#)
        .expect("FRAME_RE regex should compile")
});

/// Exception line: `<dotted.Name ending in Error|Exception|Warning>: <message>`
static EXCEPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.]+(?:Error|Exception|Warning):\s*(.*)")
        .expect("EXCEPTION_RE regex should compile")
});

/// Parse a traceback block into frames and exception lines
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `text` - A traceback block, or any text (non-tracebacks yield no frames)
///
/// # Returns
/// Parsed block; `frames` is empty when nothing recognizable was found
pub fn parse(text: &str) -> ParsedBlock {
    let raw_lines: Vec<String> = text.lines().map(str::to_string).collect();
    let mut frames: Vec<Frame> = Vec::new();
    let mut exception_lines: Vec<String> = Vec::new();

    let mut index = 0;
    while index < raw_lines.len() {
        let line = &raw_lines[index];

        if let Some(caps) = FRAME_RE.captures(line) {
            let source_line = raw_lines
                .get(index + 1)
                .and_then(|next| capture_source_line(next));
            let consumed = if source_line.is_some() { 2 } else { 1 };

            frames.push(Frame {
                filename: caps[1].to_string(),
                line_number: parse_line_number(&caps[2]),
                scope_name: caps[3].trim().to_string(),
                source_line,
                position: frames.len(),
            });

            index += consumed;
            continue;
        }

        let trimmed = line.trim();
        if EXCEPTION_RE.is_match(trimmed) {
            let mut collected = trimmed.to_string();
            index += 1;

            // Fold notes and wrapped messages into the same logical line
            while let Some(next) = raw_lines.get(index) {
                if !is_exception_continuation(next) {
                    break;
                }
                collected.push(' ');
                collected.push_str(next.trim());
                index += 1;
            }

            exception_lines.push(collected);
            continue;
        }

        index += 1;
    }

    debug!(
        "Parsed {} frames and {} exception lines from {} lines",
        frames.len(),
        exception_lines.len(),
        raw_lines.len()
    );

    ParsedBlock {
        frames,
        exception_lines,
        raw_lines,
    }
}

/// Whether a line looks like a traceback frame header
///
/// **Public** - also used by the detector to locate the last frame
pub fn is_frame_header(line: &str) -> bool {
    FRAME_RE.is_match(line)
}

/// Parse a line-number token, falling back to the sentinel
///
/// **Private** - internal helper for parse
fn parse_line_number(token: &str) -> i64 {
    match token.parse::<u32>() {
        Ok(n) => i64::from(n),
        Err(e) => {
            trace!("Unparseable line number {:?}: {}", token, e);
            UNKNOWN_LINE_NUMBER
        }
    }
}

/// Return the trimmed source line if `line` is the code shown under a frame
///
/// **Private** - internal helper for parse
fn capture_source_line(line: &str) -> Option<String> {
    if !line.starts_with([' ', '\t']) || FRAME_RE.is_match(line) {
        return None;
    }
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Blank lines and lines indented by four spaces continue an exception
///
/// Each continuation adds one space plus its trimmed text, so a blank line
/// leaves an extra space behind.
///
/// **Private** - internal helper for parse
fn is_exception_continuation(line: &str) -> bool {
    line.starts_with("    ") || line.trim().is_empty()
}
