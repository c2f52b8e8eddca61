//! Whole-document rewriting.
//!
//! Each detected block is compacted independently. A block that fails to
//! compact is put back verbatim, so the worst case output equals the input.

use crate::compactor::{compact_block, CompactOptions};
use crate::detector::detect_and_replace;
use crate::utils::error::CompactError;
use log::{debug, warn};

/// Replace every traceback in `prompt` with its compact summary
///
/// **Public** - main entry point of the crate
///
/// Idempotent: text that already contains a compact summary is returned
/// unchanged, so `rewrite(&rewrite(x, o), o) == rewrite(x, o)`.
///
/// # Example
/// ```
/// use trace_compactor::{rewrite, CompactOptions};
///
/// let prompt = "No traceback here.";
/// assert_eq!(rewrite(prompt, &CompactOptions::new()), prompt);
/// ```
pub fn rewrite(prompt: &str, options: &CompactOptions) -> String {
    rewrite_with(prompt, |block| compact_block(block, options))
}

/// Substitute every block with `compact(block)`, keeping blocks that fail
///
/// **Private** - fail-open core of `rewrite`
fn rewrite_with<F>(prompt: &str, mut compact: F) -> String
where
    F: FnMut(&str) -> Result<String, CompactError>,
{
    let mut blocks = 0usize;

    let rewritten = detect_and_replace(prompt, |block| {
        blocks += 1;
        match compact(block) {
            Ok(compacted) => compacted,
            Err(e) => {
                warn!("Failed to compact traceback block, keeping original: {}", e);
                block.to_string()
            }
        }
    });

    debug!(
        "Rewrote {} traceback block(s): {} -> {} bytes",
        blocks,
        prompt.len(),
        rewritten.len()
    );

    rewritten
}
