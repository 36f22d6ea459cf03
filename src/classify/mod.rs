//! Extension-based classification of text candidates.
//!
//! Only the file name is consulted; content is never inspected. The
//! default allow-list is `txt`, `c`, `h`, `cpp` and `java`, which skips
//! plenty of legitimate text files (`.md`, `.rs`, extensionless names
//! like `Makefile`). That narrowness is intentional and kept for
//! compatibility; callers needing a wider net construct a classifier
//! with their own extension set.

use std::collections::BTreeSet;

/// Extensions accepted by [`Classifier::default`].
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["txt", "c", "h", "cpp", "java"];

/// Decides whether a file is eligible for scanning based on its name's
/// extension.
#[derive(Debug, Clone)]
pub struct Classifier {
    extensions: BTreeSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS)
    }
}

impl Classifier {
    /// Builds a classifier accepting exactly the given extensions,
    /// written without a leading dot and compared case-sensitively.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `filename` carries an allow-listed extension.
    ///
    /// The extension is the substring after the last `.`. Names without
    /// a dot, and names ending in a bare dot, are never candidates.
    pub fn is_text_candidate(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => self.extensions.contains(ext),
            _ => false,
        }
    }
}
