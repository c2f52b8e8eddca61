//! Traceback parsing and schema definitions.
//!
//! This module handles:
//! - Extracting frames (path, line, scope, source line)
//! - Reconstructing multi-line exception messages
//! - Defining the parsed block schema

pub mod schema;
pub mod traceback;

// Re-export main types
pub use schema::{Frame, ParsedBlock};
pub use traceback::{is_frame_header, parse};
