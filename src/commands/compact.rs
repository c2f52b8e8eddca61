//! Compact command implementation.
//!
//! The compact command:
//! 1. Validates the input source
//! 2. Reads the text from stdin or a file
//! 3. Rewrites every traceback into a compact summary
//! 4. Prints the result (plain text or JSON preview)

use crate::compactor::CompactOptions;
use crate::output::{report_to_string, CompactReport};
use crate::rewrite::rewrite;
use crate::utils::config::{COMPACT_OPEN_TAG, DEFAULT_MAX_FRAMES};
use crate::utils::error::InputError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Read;
use std::path::PathBuf;

/// Where the text to compact comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Arguments for the compact command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompactArgs {
    /// Read the prompt from standard input
    pub stdin: bool,

    /// Read the prompt from this file
    pub file: Option<PathBuf>,

    /// Maximum frames kept per traceback
    pub max_frames: usize,

    /// Path biasing frame selection towards the user's code
    pub project_root: Option<String>,

    /// Emit a JSON preview instead of the rewritten text
    pub json: bool,
}

impl Default for CompactArgs {
    fn default() -> Self {
        Self {
            stdin: false,
            file: None,
            max_frames: DEFAULT_MAX_FRAMES,
            project_root: None,
            json: false,
        }
    }
}

impl CompactArgs {
    /// Resolve the single input source
    ///
    /// # Errors
    /// * `InputError::NoSource` - neither stdin nor a file was requested
    /// * `InputError::ConflictingSources` - both were requested
    pub fn input_source(&self) -> Result<InputSource, InputError> {
        match (self.stdin, &self.file) {
            (true, None) => Ok(InputSource::Stdin),
            (false, Some(path)) => Ok(InputSource::File(path.clone())),
            (true, Some(_)) => Err(InputError::ConflictingSources),
            (false, None) => Err(InputError::NoSource),
        }
    }

    /// Compaction options derived from the arguments
    pub fn options(&self) -> CompactOptions {
        let options = CompactOptions::new().with_max_frames(self.max_frames);
        match &self.project_root {
            Some(root) => options.with_project_root(root.clone()),
            None => options,
        }
    }
}

/// Validate compact arguments
///
/// **Public** - can be called before execute_compact for early validation
pub fn validate_args(args: &CompactArgs) -> Result<()> {
    args.input_source()?;
    Ok(())
}

/// Execute the compact command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid input source combination
/// * I/O failure reading stdin or the input file
/// * JSON serialization failure (with `--json`)
pub fn execute_compact(args: CompactArgs) -> Result<()> {
    let source = args.input_source()?;

    let text = read_input(&source).with_context(|| match &source {
        InputSource::Stdin => "Failed to read prompt from stdin".to_string(),
        InputSource::File(path) => format!("Failed to read prompt from {}", path.display()),
    })?;

    let output = run_compact(&text, &args)?;
    println!("{}", output);

    Ok(())
}

/// Rewrite `text` and format it according to `args`
///
/// **Public** - the I/O-free core of the command, used by tests
pub fn run_compact(text: &str, args: &CompactArgs) -> Result<String> {
    let compacted = rewrite(text, &args.options());

    info!(
        "Compacted {} traceback(s): {} -> {} chars",
        compacted.matches(COMPACT_OPEN_TAG).count(),
        text.chars().count(),
        compacted.chars().count()
    );

    if args.json {
        let report = CompactReport::new(text, &compacted);
        report_to_string(&report).context("Failed to serialize JSON report")
    } else {
        Ok(compacted)
    }
}

/// Read all text from the given source
///
/// **Public** - exposed for callers that build their own pipeline
pub fn read_input(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Stdin => {
            debug!("Reading prompt from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        InputSource::File(path) => {
            debug!("Reading prompt from: {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
    }
}
