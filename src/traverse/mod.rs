//! Directory traversal.
//!
//! Walks a directory tree depth-first, dispatching eligible regular
//! files to the line scanner and streaming every match to the caller's
//! sink in walk order. No ignore rules apply; the walk sees dotfiles
//! too. Symbolic links are classified by their own status and never
//! followed, so a broken or cyclic link cannot derail the traversal.

use ignore::WalkBuilder;
use std::path::Path;

use crate::classify::Classifier;
use crate::paths::{MAX_PATH_BYTES, within_path_limit};
use crate::search::{Match, ScanOptions, scan_file};
use crate::telemetry::{LogMessage, log_with_context};

/// Configuration options for a search traversal.
#[derive(Debug, Clone)]
pub struct TraverseOptions {
    /// When true, letter comparisons normalize ASCII case.
    pub case_insensitive: bool,

    /// Extension gate applied to regular files before scanning.
    pub classifier: Classifier,

    /// Maximum depth of directory traversal (number of directory levels
    /// to descend below the root), `None` for unbounded.
    pub depth: Option<usize>,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            classifier: Classifier::default(),
            depth: Some(64),
        }
    }
}

/// Walks `directory` and invokes `sink` for every line matching `term`,
/// in walk order.
///
/// The traversal itself never fails: an unopenable root or subdirectory
/// is reported to the diagnostic stream and skipped, and enumeration of
/// its siblings continues. Entries that are neither directories nor
/// regular files (symlinks, fifos, sockets, devices) are silently
/// skipped.
pub fn search_directory(
    directory: &Path,
    term: &str,
    options: &TraverseOptions,
    mut sink: impl FnMut(Match),
) {
    // The root must be a directory (possibly behind a symlink, which
    // is resolved here and nowhere else). Anything else is a terminal
    // condition for this walk, not for the process.
    if !directory.is_dir() {
        log_with_context(
            log::Level::Warn,
            LogMessage {
                message: "Cannot open directory".to_string(),
                module: "traverse",
                context: Some(vec![("directory", directory.display().to_string())]),
            },
        );
        return;
    }

    let scan_options = ScanOptions {
        case_insensitive: options.case_insensitive,
    };

    for result in build_walk(directory, options.depth) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log_with_context(
                    log::Level::Warn,
                    LogMessage {
                        message: format!("Error walking directory: {}", err),
                        module: "traverse",
                        context: Some(vec![("directory", directory.display().to_string())]),
                    },
                );
                continue;
            }
        };

        // Directories are descended by the walker itself. file_type()
        // reflects the entry's own (link) status, so a symlink to a
        // regular file is not a regular file here.
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !within_path_limit(path) {
            log_with_context(
                log::Level::Warn,
                LogMessage {
                    message: format!("Composed path exceeds {} bytes, skipping", MAX_PATH_BYTES),
                    module: "traverse",
                    context: Some(vec![("file_path", path.display().to_string())]),
                },
            );
            continue;
        }

        let eligible = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| options.classifier.is_text_candidate(name));
        if !eligible {
            continue;
        }

        for found in scan_file(path, term, &scan_options) {
            sink(found);
        }
    }
}

/// Convenience wrapper collecting every match of a traversal.
pub fn collect_matches(directory: &Path, term: &str, options: &TraverseOptions) -> Vec<Match> {
    let mut matches = Vec::new();
    search_directory(directory, term, options, |found| matches.push(found));
    matches
}

/// Builds the file system walker for a search traversal.
fn build_walk(directory: &Path, depth: Option<usize>) -> ignore::Walk {
    let mut builder = WalkBuilder::new(directory);
    // Turn off all ignore logic: this tool has no exclusion system, so
    // hidden files, ignored files and git metadata are all walked.
    builder.hidden(false);
    builder.ignore(false);
    builder.parents(false);
    builder.git_ignore(false);
    builder.git_exclude(false);
    builder.git_global(false);
    builder.follow_links(false);
    builder.max_depth(depth);
    builder.build()
}
