//! Trace Compactor CLI
//!
//! Reads a prompt from stdin or a file, replaces every Python traceback in
//! it with a compact summary and prints the result.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use env_logger::Env;
use std::path::PathBuf;

use trace_compactor::commands::{execute_compact, CompactArgs};
use trace_compactor::utils::config::{DEFAULT_MAX_FRAMES, ENV_MAX_FRAMES, ENV_PROJECT_ROOT};

/// Trace Compactor - shrink Python tracebacks in prompts
#[derive(Parser, Debug)]
#[command(name = "trace-compactor")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["stdin", "file"])))]
struct Cli {
    /// Read prompt from stdin
    #[arg(long)]
    stdin: bool,

    /// Read prompt from file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Path to bias frame selection towards user code
    #[arg(long, env = ENV_PROJECT_ROOT)]
    project_root: Option<String>,

    /// Maximum frames kept per traceback
    #[arg(long, env = ENV_MAX_FRAMES, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: usize,

    /// Output JSON with structured fields
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout stays clean for the rewritten text)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = CompactArgs {
        stdin: cli.stdin,
        file: cli.file,
        max_frames: cli.max_frames,
        project_root: cli.project_root,
        json: cli.json,
    };

    execute_compact(args)
}
