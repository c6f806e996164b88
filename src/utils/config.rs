//! Configuration and constants for the CLI.

/// Separator used by gocloc in file paths
pub const PATH_SEPARATOR: &str = "/";

/// Input file read by `--input` when no path is given
pub const DEFAULT_INPUT_FILE: &str = "sloc.json";

/// Output file written by `--output` when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "sourcetree.json";

/// Path that stands for stdin/stdout
pub const STDIO_PATH: &str = "-";
