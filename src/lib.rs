//! Trace Compactor
//!
//! Detects Python tracebacks inside free-form text (for example a prompt
//! pasted into an LLM chat) and rewrites each one into a compact, tagged,
//! fingerprinted summary that keeps the exception and the most relevant
//! frames.
//!
//! This crate provides the core implementation for the
//! `trace-compactor` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use trace_compactor::{rewrite, CompactOptions};
//!
//! let prompt = "Traceback (most recent call last):\n  File \"/home/me/app/main.py\", line 3, in run\n    load()\nKeyError: 'id'";
//! let options = CompactOptions::new().with_project_root("/home/me/app");
//! let compacted = rewrite(prompt, &options);
//! assert!(compacted.contains("- main.py:3 in run → load()"));
//! ```

pub mod commands;
pub mod compactor;
pub mod detector;
pub mod output;
pub mod parser;
pub mod rewrite;
pub mod utils;

// Re-export the public entry points
pub use compactor::{compact_block, CompactOptions, CompactSummary};
pub use parser::{parse, Frame, ParsedBlock};
pub use rewrite::rewrite;
pub use utils::error::{CompactError, InputError};
