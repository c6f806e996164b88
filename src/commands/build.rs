//! Build command implementation.
//!
//! The build command:
//! 1. Reads the gocloc report (stdin or file)
//! 2. Builds the aggregated directory tree
//! 3. Writes the tree as JSON (stdout or file)

use crate::aggregator::{build_tree, check_totals, summarize, BuildOptions, Node};
use crate::output::{write_tree, write_tree_file};
use crate::parser::{read_stats, read_stats_file, SlocStats};
use crate::utils::config::STDIO_PATH;
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Input report path (None or "-" = stdin)
    pub input: Option<PathBuf>,

    /// Output tree path (None or "-" = stdout)
    pub output: Option<PathBuf>,

    /// Tree builder options
    pub options: BuildOptions,

    /// Indent the JSON output
    pub pretty: bool,

    /// Print a per-language summary to stderr
    pub print_summary: bool,
}

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The root node that was written
///
/// # Errors
/// Each failing stage is named in the error context:
/// reading input, "unmarshal source content", building the tree, or
/// writing output.
pub fn execute_build(args: &BuildArgs) -> Result<Node> {
    let start_time = Instant::now();

    // Step 1: Read input
    info!("Step 1/3: Reading gocloc report...");
    let stats = load_stats(args.input.as_deref())?;

    // Step 2: Build tree
    info!("Step 2/3: Building tree from {} records...", stats.files.len());
    let tree = build_tree(&stats.files, &args.options).context("build tree")?;

    let summary = summarize(&tree);
    info!("Tree: {}", summary.summary());

    if let Some(total) = &stats.total {
        match check_totals(&tree, total) {
            Some(mismatch) => warn!("Totals differ: {}", mismatch.summary()),
            None => debug!("Tree totals match report totals"),
        }
    }

    // Step 3: Write output
    info!("Step 3/3: Writing tree...");
    match stdio_or_path(args.output.as_deref()) {
        Some(path) => write_tree_file(&tree, path, args.pretty)
            .with_context(|| format!("write output file {}", path.display()))?,
        None => write_tree(&tree, std::io::stdout().lock(), args.pretty)
            .context("write to STDOUT")?,
    }

    if args.print_summary {
        eprintln!("{}", summary.format_report());
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(tree)
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    for path in [&args.input, &args.output].into_iter().flatten() {
        if path.as_os_str().is_empty() {
            anyhow::bail!("File path cannot be empty");
        }
    }

    if let (Some(input), Some(output)) = (
        stdio_or_path(args.input.as_deref()),
        stdio_or_path(args.output.as_deref()),
    ) {
        if resolve_path(input) == resolve_path(output) {
            anyhow::bail!(
                "Input and output must be different files: {} and {}",
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Read and parse the report from stdin or a file
fn load_stats(input: Option<&Path>) -> Result<SlocStats> {
    let (result, source) = match stdio_or_path(input) {
        Some(path) => (read_stats_file(path), format!("read input file {}", path.display())),
        None => (read_stats(std::io::stdin().lock()), "read from STDIN".to_string()),
    };

    result.map_err(|err| {
        let stage = match &err {
            ParseError::ReadFailed(_) => source,
            ParseError::JsonError(_) => "unmarshal source content".to_string(),
        };
        anyhow::Error::new(err).context(stage)
    })
}

/// Resolve a path for comparison, following `.`/`..` and symlinks
///
/// The output file may not exist yet, so its parent is resolved instead.
/// Paths that cannot be resolved are compared as written.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match (parent.canonicalize(), path.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// Map "-" and absent paths to None (standard streams)
fn stdio_or_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != STDIO_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&BuildArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        let args = BuildArgs {
            output: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_file() {
        let args = BuildArgs {
            input: Some(PathBuf::from("sloc.json")),
            output: Some(PathBuf::from("sloc.json")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_file_spelled_differently() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("sloc.json");
        std::fs::write(&input, "{}").unwrap();

        let args = BuildArgs {
            input: Some(input),
            output: Some(temp_dir.path().join(".").join("sloc.json")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_new_output_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("sloc.json");
        std::fs::write(&input, "{}").unwrap();

        let args = BuildArgs {
            input: Some(input),
            output: Some(temp_dir.path().join("sourcetree.json")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_resolve_path_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("sub/../out.json");

        assert_eq!(
            resolve_path(&missing).file_name(),
            Some(std::ffi::OsStr::new("out.json"))
        );
    }

    #[test]
    fn test_validate_args_stdio_markers() {
        let args = BuildArgs {
            input: Some(PathBuf::from("-")),
            output: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_stdio_or_path() {
        assert_eq!(stdio_or_path(None), None);
        assert_eq!(stdio_or_path(Some(Path::new("-"))), None);
        assert_eq!(
            stdio_or_path(Some(Path::new("a.json"))),
            Some(Path::new("a.json"))
        );
    }
}
