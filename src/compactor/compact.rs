//! Frame selection and block compaction.
//!
//! Selection and rendering use two different orders of the same set:
//! frames are *chosen* by descending relevance score but *rendered* in
//! their original textual order.

use super::fingerprint::fingerprint_frames;
use super::options::CompactOptions;
use super::scoring::frame_score;
use super::summary::CompactSummary;
use crate::parser::{parse, Frame, ParsedBlock};
use crate::utils::error::CompactError;
use log::debug;
use std::collections::HashSet;

/// Compact a single traceback block into a tagged summary
///
/// **Public** - main entry point for compaction
///
/// # Arguments
/// * `block` - Text of one traceback block
/// * `options` - Frame bound and optional project root
///
/// # Returns
/// The rendered summary, or `block` unchanged when it contains no frames
///
/// # Errors
/// * `CompactError::Fingerprint` - canonical serialization failed
///
/// # Example
/// ```
/// use trace_compactor::{compact_block, CompactOptions};
///
/// let block = "Traceback (most recent call last):\n  File \"test.py\", line 5, in main\n    raise ValueError(\"test\")\nValueError: test";
/// let compacted = compact_block(block, &CompactOptions::new()).unwrap();
/// assert!(compacted.starts_with("<COMPACT_PY_TRACEBACK fingerprint=4a3da041b5>"));
/// ```
pub fn compact_block(block: &str, options: &CompactOptions) -> Result<String, CompactError> {
    let parsed = parse(block);

    match summarize(&parsed, options)? {
        Some(summary) => Ok(summary.render()),
        None => {
            debug!("No frames found, leaving block untouched");
            Ok(block.to_string())
        }
    }
}

/// Build the structured summary for a parsed block
///
/// **Public** - returns `None` when the block has no frames
pub fn summarize(
    parsed: &ParsedBlock,
    options: &CompactOptions,
) -> Result<Option<CompactSummary>, CompactError> {
    if !parsed.is_traceback() {
        return Ok(None);
    }

    let selected_frames = select_frames(&parsed.frames, options);
    let fingerprint = fingerprint_frames(&selected_frames)?;

    debug!(
        "Selected {} of {} frames (fingerprint {})",
        selected_frames.len(),
        parsed.frames.len(),
        fingerprint
    );

    Ok(Some(CompactSummary {
        fingerprint,
        primary_exception: parsed.primary_exception().map(str::to_string),
        selected_frames,
    }))
}

/// Choose up to `max_frames` distinct frames by relevance
///
/// **Public** - result is in textual (position) order
///
/// # Algorithm
/// 1. Score every frame and sort descending (stable on ties)
/// 2. Walk the sorted list, skipping duplicate `(file, line, scope)` keys
/// 3. Stop at `max_frames` picks
/// 4. Re-emit the picks in their original order
pub fn select_frames(frames: &[Frame], options: &CompactOptions) -> Vec<Frame> {
    let project_root = options.project_root();

    let mut ranked: Vec<(i64, &Frame)> = frames
        .iter()
        .map(|frame| (frame_score(frame, project_root), frame))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let mut chosen_positions: HashSet<usize> = HashSet::new();
    let mut chosen_keys: HashSet<(&str, i64, &str)> = HashSet::new();

    for (_, frame) in ranked {
        if chosen_positions.len() >= options.max_frames {
            break;
        }
        if chosen_keys.insert(frame.key()) {
            chosen_positions.insert(frame.position);
        }
    }

    frames
        .iter()
        .filter(|frame| chosen_positions.contains(&frame.position))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(filename: &str, line_number: i64, scope_name: &str, position: usize) -> Frame {
        Frame {
            filename: filename.to_string(),
            line_number,
            scope_name: scope_name.to_string(),
            source_line: None,
            position,
        }
    }

    #[test]
    fn test_select_frames_prefers_recent() {
        let frames: Vec<Frame> = (0..5)
            .map(|i| frame(&format!("file{}.py", i), i as i64, "f", i))
            .collect();

        let selected = select_frames(&frames, &CompactOptions::new().with_max_frames(2));
        let positions: Vec<usize> = selected.iter().map(|f| f.position).collect();

        assert_eq!(positions, vec![3, 4]);
    }

    #[test]
    fn test_select_frames_skips_duplicates() {
        let frames = vec![
            frame("a.py", 1, "loop", 0),
            frame("a.py", 1, "loop", 1),
            frame("a.py", 1, "loop", 2),
            frame("b.py", 9, "leaf", 3),
        ];

        let selected = select_frames(&frames, &CompactOptions::new());
        let positions: Vec<usize> = selected.iter().map(|f| f.position).collect();

        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn test_select_frames_zero_bound() {
        let frames = vec![frame("a.py", 1, "f", 0)];
        let selected = select_frames(&frames, &CompactOptions::new().with_max_frames(0));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_render_order_differs_from_score_order() {
        let frames = vec![
            frame("/home/u/app/first.py", 1, "first", 0),
            frame("/usr/lib/python3.11/lib.py", 2, "middle", 1),
            frame("/home/u/app/last.py", 3, "last", 2),
        ];
        let options = CompactOptions::new()
            .with_max_frames(2)
            .with_project_root("/home/u/app");

        let selected = select_frames(&frames, &options);
        let scopes: Vec<&str> = selected.iter().map(|f| f.scope_name.as_str()).collect();

        assert_eq!(scopes, vec!["first", "last"]);
    }

    #[test]
    fn test_summarize_without_frames() {
        let parsed = parse("just prose, ValueError: not a trace");
        assert_eq!(summarize(&parsed, &CompactOptions::new()).unwrap(), None);
    }
}
