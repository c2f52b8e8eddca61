//! Frame scoring, selection, fingerprinting and summary rendering.
//!
//! This module turns a parsed traceback into:
//! - A bounded, relevance-ranked subset of frames
//! - A deterministic fingerprint of that subset
//! - The tagged compact summary text

pub mod compact;
pub mod fingerprint;
pub mod options;
pub mod scoring;
pub mod summary;

// Re-export main types and functions
pub use compact::{compact_block, select_frames, summarize};
pub use fingerprint::{canonical_json, fingerprint_frames};
pub use options::CompactOptions;
pub use scoring::{frame_score, is_library_path, is_under_project_root};
pub use summary::{base_name, CompactSummary};
