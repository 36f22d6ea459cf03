use anyhow::Result;
use tempfile::TempDir;
use wordseek::traverse::{TraverseOptions, collect_matches};

use test_helpers::{hello_tree, write_file};

/// Tests for whole-tree search behavior
#[cfg(test)]
mod search_tests {
    use super::*;

    /// Case-sensitive search over the two-file fixture finds exactly the
    /// two `hello` lines of a.txt and nothing in sub/b.c
    #[test]
    fn test_hello_scenario_case_sensitive() -> Result<()> {
        let dir = TempDir::new()?;
        hello_tree(dir.path())?;

        let matches = collect_matches(dir.path(), "hello", &TraverseOptions::default());

        assert_eq!(matches.len(), 2);
        let a_txt = dir.path().join("a.txt");
        assert_eq!(matches[0].file_path, a_txt);
        assert_eq!(matches[0].line_number, 1);
        assert_eq!(matches[0].line_text, "hello");
        assert_eq!(matches[1].file_path, a_txt);
        assert_eq!(matches[1].line_number, 3);
        assert_eq!(matches[1].line_text, "hello world");

        Ok(())
    }

    /// Case-insensitive search finds the term anywhere in a line, not
    /// only at column 0
    #[test]
    fn test_hello_scenario_case_insensitive() -> Result<()> {
        let dir = TempDir::new()?;
        hello_tree(dir.path())?;

        let options = TraverseOptions {
            case_insensitive: true,
            ..TraverseOptions::default()
        };
        let matches = collect_matches(dir.path(), "world", &options);

        let numbers: Vec<u64> = matches.iter().map(|m| m.line_number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(matches[0].line_text, "World");
        assert_eq!(matches[1].line_text, "hello world");

        Ok(())
    }

    /// A term absent in either case yields no matches at all
    #[test]
    fn test_search_no_matches() -> Result<()> {
        let dir = TempDir::new()?;
        hello_tree(dir.path())?;

        let options = TraverseOptions {
            case_insensitive: true,
            ..TraverseOptions::default()
        };
        assert!(collect_matches(dir.path(), "zebra", &options).is_empty());
        assert!(collect_matches(dir.path(), "ZEBRA", &options).is_empty());

        Ok(())
    }

    /// Two runs over an unchanged tree produce the same multiset of
    /// matches
    #[test]
    fn test_search_is_idempotent() -> Result<()> {
        let dir = TempDir::new()?;
        hello_tree(dir.path())?;
        write_file(dir.path(), "sub/deeper/c.h", "hello again\n")?;

        let options = TraverseOptions::default();
        let mut first = collect_matches(dir.path(), "hello", &options);
        let mut second = collect_matches(dir.path(), "hello", &options);

        first.sort_by(|a, b| (&a.file_path, a.line_number).cmp(&(&b.file_path, b.line_number)));
        second.sort_by(|a, b| (&a.file_path, a.line_number).cmp(&(&b.file_path, b.line_number)));
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);

        Ok(())
    }

    /// Matches in files outside the allow-list are never reported, even
    /// when the content would match
    #[test]
    fn test_search_skips_non_candidates() -> Result<()> {
        let dir = TempDir::new()?;
        write_file(dir.path(), "notes.txt", "needle\n")?;
        write_file(dir.path(), "notes.md", "needle\n")?;
        write_file(dir.path(), "Makefile", "needle\n")?;

        let matches = collect_matches(dir.path(), "needle", &TraverseOptions::default());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].file_path, dir.path().join("notes.txt"));

        Ok(())
    }
}
