//! Composed-path length limits.
//!
//! Child paths are built by joining a traversal path and an entry name.
//! Instead of truncating an overlong composition silently, paths beyond
//! a documented maximum are rejected so the caller can skip the entry
//! with a diagnostic.

use std::path::Path;

/// Maximum byte length of a composed file path. Entries whose full path
/// exceeds this bound are skipped, never truncated.
pub const MAX_PATH_BYTES: usize = 4096;

/// Returns true if `path` fits within [`MAX_PATH_BYTES`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use wordseek::paths::within_path_limit;
///
/// assert!(within_path_limit(Path::new("/home/user/files/notes.txt")));
/// ```
pub fn within_path_limit<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().as_os_str().len() <= MAX_PATH_BYTES
}
