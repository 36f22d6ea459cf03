//! # Wordseek
//!
//! Wordseek is a library for recursively searching local text files for a word.
//!
//! ## Features
//!
//! * File classification - extension allow-list deciding which files are text candidates
//! * Line scanning - memory-mapped substring search reporting 1-based line numbers
//! * Directory traversal - bounded-depth walk that never follows symbolic links

/// Extension-based text candidate classification
pub mod classify;
/// Composed-path length limits
pub mod paths;
/// Match formatting and output
pub mod report;
/// Per-file memory-mapped line scanning
pub mod search;
/// Logging configuration for stderr diagnostics
pub mod telemetry;
/// Directory traversal dispatching candidate files to the scanner
pub mod traverse;
