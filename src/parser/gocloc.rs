//! Reader for gocloc `--by-file` JSON reports.
//!
//! Only the minimal structure needed to build the tree is checked:
//! a `Files` array whose entries carry a `name` and integer counts.

use super::schema::SlocStats;
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a gocloc report from a string
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::JsonError` - not JSON, or not shaped like a gocloc report
pub fn parse_stats(content: &str) -> Result<SlocStats, ParseError> {
    let stats: SlocStats = serde_json::from_str(content)?;
    log_parsed(&stats);
    Ok(stats)
}

/// Read and parse a gocloc report from any reader (usually stdin)
///
/// The whole stream is read as raw bytes before parsing, so an I/O failure
/// is reported as such and bytes that are not UTF-8 fail as bad JSON.
///
/// # Errors
/// * `ParseError::ReadFailed` - the stream could not be read
/// * `ParseError::JsonError` - the content is not a gocloc report
pub fn read_stats(mut reader: impl Read) -> Result<SlocStats, ParseError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    debug!("Read {} bytes of input", content.len());

    let stats: SlocStats = serde_json::from_slice(&content)?;
    log_parsed(&stats);
    Ok(stats)
}

/// Read and parse a gocloc report from a file
pub fn read_stats_file(input_path: impl AsRef<Path>) -> Result<SlocStats, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading gocloc report from: {}", input_path.display());

    let file = File::open(input_path)?;
    read_stats(BufReader::new(file))
}

fn log_parsed(stats: &SlocStats) {
    debug!("Parsed {} file entries", stats.files.len());

    match &stats.total {
        Some(total) if total.files != stats.files.len() as u64 => {
            warn!(
                "Report total lists {} files but {} entries were found",
                total.files,
                stats.files.len()
            );
        }
        Some(_) => {}
        None => debug!("Report has no Total section"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{FileEntry, StatsEntry};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REPORT: &str = r#"{
        "Files": [
            {"code": 10, "comment": 2, "blank": 1, "name": "proj/a/x.go", "Lang": "Go"},
            {"code": 3, "comment": 1, "blank": 0, "name": "proj/b.go", "Lang": "Go"}
        ],
        "Total": {"files": 2, "code": 13, "comment": 3, "blank": 1}
    }"#;

    #[test]
    fn test_parse_stats() {
        let stats = parse_stats(REPORT).unwrap();

        assert_eq!(stats.files.len(), 2);
        assert_eq!(stats.files[0], FileEntry::new("proj/a/x.go", 10, 2, 1, "Go"));
        assert_eq!(
            stats.total,
            Some(StatsEntry { files: 2, code: 13, comment: 3, blank: 1 })
        );
    }

    #[test]
    fn test_parse_lowercase_fields() {
        let content = r#"{
            "files": [{"code": 7, "comment": 0, "blank": 2, "name": "main.rs", "language": "Rust"}],
            "total": {"files": 1, "code": 7, "comment": 0, "blank": 2}
        }"#;

        let stats = parse_stats(content).unwrap();

        assert_eq!(stats.files[0].language, "Rust");
        assert_eq!(stats.total.unwrap().code, 7);
    }

    #[test]
    fn test_parse_without_total() {
        let stats = parse_stats(r#"{"Files": []}"#).unwrap();
        assert!(stats.files.is_empty());
        assert!(stats.total.is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let content = r#"{"Files": [{"name": "a.c", "code": 1, "Lang": "C", "extra": true}], "Languages": []}"#;
        let stats = parse_stats(content).unwrap();
        assert_eq!(stats.files[0].code, 1);
        assert_eq!(stats.files[0].comment, 0);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_stats("not json");
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_parse_missing_files() {
        let result = parse_stats(r#"{"Total": {"files": 0}}"#);
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_parse_negative_count() {
        let content = r#"{"Files": [{"name": "a.c", "code": -1}]}"#;
        assert!(parse_stats(content).is_err());
    }

    #[test]
    fn test_read_stats_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(REPORT.as_bytes()).unwrap();

        let stats = read_stats_file(temp_file.path()).unwrap();
        assert_eq!(stats.files.len(), 2);
    }

    #[test]
    fn test_read_stats_invalid_utf8_is_json_error() {
        let mut content = br#"{"Files": [{"code": 1, "name": "a"#.to_vec();
        content.push(0xFF);
        content.extend_from_slice(br#".go", "Lang": "Go"}]}"#);

        let result = read_stats(content.as_slice());
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_read_stats_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_stats_file(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(ParseError::ReadFailed(_))));
    }
}
