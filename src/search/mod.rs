//! Per-file line scanning.
//!
//! A candidate file is memory-mapped once per scan. A whole-buffer
//! containment check decides whether the line pass runs at all, and the
//! line pass then iterates over the same mapping without reopening or
//! rereading the file. Both the containment check and the per-line test
//! honor the case-insensitivity flag.

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::telemetry::{LogMessage, log_with_context};

/// Maximum number of line bytes compared and reported. Longer lines are
/// truncated at this boundary, with a diagnostic.
pub const MAX_LINE_BYTES: usize = 8 * 1024;

/// Configuration options for scanning a single file.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// When true, letter comparisons normalize ASCII case, so matches
    /// are found regardless of letter case.
    pub case_insensitive: bool,
}

/// Represents a single matching line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Path to the file containing the match
    pub file_path: PathBuf,

    /// Line number where the match was found (1-based)
    pub line_number: u64,

    /// Content of the line, with the trailing newline stripped
    pub line_text: String,
}

/// Scans one file for `term`, producing a [`Match`] per containing line.
///
/// Empty files yield no matches. Files that cannot be opened, stat'd or
/// mapped are reported to the diagnostic stream and likewise yield no
/// matches; scan failures never propagate to the caller, so a bad file
/// cannot abort a traversal. Re-invoke to rescan.
pub fn scan_file(path: &Path, term: &str, options: &ScanOptions) -> Vec<Match> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log_with_context(
                log::Level::Warn,
                LogMessage {
                    message: format!("Failed to open file: {}", e),
                    module: "search",
                    context: Some(vec![("file_path", path.display().to_string())]),
                },
            );
            return Vec::new();
        }
    };

    let size = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            log_with_context(
                log::Level::Warn,
                LogMessage {
                    message: format!("Failed to stat file: {}", e),
                    module: "search",
                    context: Some(vec![("file_path", path.display().to_string())]),
                },
            );
            return Vec::new();
        }
    };

    // An empty file cannot be mapped, and cannot match anything.
    if size == 0 {
        return Vec::new();
    }

    // SAFETY: the mapping is read-only and dropped at the end of this
    // scan; the file is not expected to be mutated during a run.
    let mapped = match unsafe { Mmap::map(&file) } {
        Ok(m) => m,
        Err(e) => {
            log_with_context(
                log::Level::Warn,
                LogMessage {
                    message: format!("Failed to map file: {}", e),
                    module: "search",
                    context: Some(vec![("file_path", path.display().to_string())]),
                },
            );
            return Vec::new();
        }
    };

    scan_buffer(path, &mapped, term.as_bytes(), options)
}

/// Line pass over a file's full content.
///
/// The leading whole-buffer check sees raw bytes including newlines, so
/// relative to the per-line test it can only produce false positives
/// (a term spanning a line break), never false negatives.
fn scan_buffer(path: &Path, content: &[u8], term: &[u8], options: &ScanOptions) -> Vec<Match> {
    let mut matches = Vec::new();

    if !contains(content, term, options.case_insensitive) {
        return matches;
    }

    // A trailing newline terminates the last line rather than opening
    // an empty one past it; an unterminated trailing fragment still
    // counts as a line.
    let body = content.strip_suffix(b"\n").unwrap_or(content);

    for (index, raw_line) in body.split(|&b| b == b'\n').enumerate() {
        let line = if raw_line.len() > MAX_LINE_BYTES {
            log_with_context(
                log::Level::Warn,
                LogMessage {
                    message: format!("Line exceeds {} bytes, truncated", MAX_LINE_BYTES),
                    module: "search",
                    context: Some(vec![
                        ("file_path", path.display().to_string()),
                        ("line_number", (index + 1).to_string()),
                    ]),
                },
            );
            &raw_line[..MAX_LINE_BYTES]
        } else {
            raw_line
        };

        if contains(line, term, options.case_insensitive) {
            matches.push(Match {
                file_path: path.to_path_buf(),
                line_number: (index + 1) as u64,
                line_text: String::from_utf8_lossy(line).into_owned(),
            });
        }
    }

    matches
}

/// Byte substring containment, with optional ASCII case folding.
fn contains(haystack: &[u8], needle: &[u8], case_insensitive: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    if case_insensitive {
        haystack
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
    } else {
        haystack.windows(needle.len()).any(|window| window == needle)
    }
}
