//! Output formats for rewritten text.
//!
//! - Plain rewritten text (printed directly by the CLI)
//! - JSON preview reports

pub mod json;

// Re-export main types
pub use json::{report_to_string, CompactReport};
