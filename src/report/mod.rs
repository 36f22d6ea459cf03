//! Match formatting and output.
//!
//! Matches are printed strictly in the order they arrive, one
//! three-line block per match. Write failures are not surfaced; a
//! broken stdout is indistinguishable from success.

use std::io::Write;
use std::path::Path;

use crate::search::Match;

/// Separator printed after every match block.
const SEPARATOR: &str = "------------------------------";

/// Writes match reports sequentially to the underlying writer.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints the one-line search header naming the term and the root
    /// directory, followed by a blank line.
    pub fn banner(&mut self, term: &str, root: &Path) {
        let _ = writeln!(
            self.out,
            "Searching for \"{}\" in directory {} (and subdirectories):",
            term,
            root.display()
        );
        let _ = writeln!(self.out);
    }

    /// Prints one match as a `File:` / `Line N:` / separator block.
    pub fn report(&mut self, found: &Match) {
        let _ = writeln!(self.out, "File: {}", found.file_path.display());
        let _ = writeln!(self.out, "Line {}: {}", found.line_number, found.line_text);
        let _ = writeln!(self.out, "{}", SEPARATOR);
    }
}
