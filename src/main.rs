//! buildtree CLI
//!
//! Reads a gocloc `--by-file` JSON report and writes the aggregated
//! directory tree as JSON. With no flags: stdin in, stdout out.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use sourcetree::aggregator::{BuildOptions, DuplicatePolicy};
use sourcetree::commands::{execute_build, validate_args, BuildArgs};
use sourcetree::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Build a line-count directory tree from gocloc output
#[derive(Parser, Debug)]
#[command(name = "buildtree")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read the report from a file instead of stdin ("-" = stdin)
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_INPUT_FILE)]
    input: Option<PathBuf>,

    /// Write the tree to a file instead of stdout ("-" = stdout)
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    output: Option<PathBuf>,

    /// Drop the first path segment (gocloc's project label)
    #[arg(long)]
    drop_root_segment: bool,

    /// Fail on repeated file paths instead of summing them
    #[arg(long)]
    reject_duplicates: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a per-language summary to stderr
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout only carries the tree)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let duplicates = if cli.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Accumulate
    };

    let args = BuildArgs {
        input: cli.input,
        output: cli.output,
        options: BuildOptions::new()
            .with_drop_root_segment(cli.drop_root_segment)
            .with_duplicates(duplicates),
        pretty: cli.pretty,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_build(&args)?;

    Ok(())
}
