//! Detection of traceback blocks inside free-form text.

pub mod block;

pub use block::{contains_compact_block, detect_and_replace};
