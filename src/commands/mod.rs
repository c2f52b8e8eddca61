//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod compact;

// Re-export main command functions
pub use compact::{
    execute_compact, read_input, run_compact, validate_args, CompactArgs, InputSource,
};
