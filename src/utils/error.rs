//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while compacting a single traceback block
///
/// The rewrite orchestrator absorbs these per block, so they never
/// escape `rewrite` itself.
#[derive(Error, Debug)]
pub enum CompactError {
    #[error("Failed to serialize frames for fingerprinting: {0}")]
    Fingerprint(#[from] serde_json::Error),

    #[error("Fingerprint source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur while acquiring CLI input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Either --stdin or --file is required")]
    NoSource,

    #[error("--stdin and --file are mutually exclusive")]
    ConflictingSources,

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),
}
