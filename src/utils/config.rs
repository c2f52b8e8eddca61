//! Configuration and constants for traceback compaction.

/// Default number of frames kept in a compact summary
pub const DEFAULT_MAX_FRAMES: usize = 4;

/// Number of hex characters kept from the fingerprint digest
pub const FINGERPRINT_LEN: usize = 10;

/// Sentinel line number for frames whose line token is not an integer
pub const UNKNOWN_LINE_NUMBER: i64 = -1;

// Compact summary wrapper. The open tag doubles as the idempotence sentinel:
// any text containing it is never rewritten again.
pub const COMPACT_OPEN_TAG: &str = "<COMPACT_PY_TRACEBACK";
pub const COMPACT_CLOSE_TAG: &str = "</COMPACT_PY_TRACEBACK>";

/// Rendered when a block has frames but no recognizable exception line
pub const UNKNOWN_EXCEPTION: &str = "<unknown exception>";

/// Rendered in place of an empty scope or filename
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Glyph separating a frame from its captured source line
pub const SOURCE_ARROW: &str = "→";

// Relevance weights for frame scoring
pub const PROJECT_FRAME_BONUS: i64 = 100;
pub const NON_LIBRARY_FRAME_BONUS: i64 = 10;

/// Substrings marking a path as stdlib, site-packages or virtualenv code.
/// `venv` also covers `.venv`.
pub const LIBRARY_PATH_MARKERS: &[&str] = &["site-packages", "/lib/python", "venv"];

/// Prefixes marking a relative path as stdlib code (`/lib/python` once absolutized)
pub const LIBRARY_PATH_PREFIXES: &[&str] = &["lib/python"];

/// Suffixes marking a path as a packaged archive
pub const LIBRARY_PATH_SUFFIXES: &[&str] = &[".egg"];

/// Characters of original and compacted text included in the JSON preview
pub const PREVIEW_CHARS: usize = 400;

// Environment variables backing the CLI options
pub const ENV_MAX_FRAMES: &str = "TRACE_COMPACTOR_MAX_FRAMES";
pub const ENV_PROJECT_ROOT: &str = "TRACE_COMPACTOR_PROJECT_ROOT";
