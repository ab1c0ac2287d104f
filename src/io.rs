//! File helpers for rewriting documents and transcripts in place.

use std::{fs, path::Path};

use crate::clean::clean_stream;
use crate::config::CleanOptions;
use crate::sweep::sweep_lines;

fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    fs::write(path, lines.join("\n") + "\n")
}

/// Rewrite a document in place, returning the removed-character count.
///
/// Empty files are left untouched.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, opts: &CleanOptions) -> std::io::Result<usize> {
    let lines = read_lines(path)?;
    if lines.is_empty() {
        return Ok(0);
    }
    let (fixed, removed) = clean_stream(&lines, opts);
    write_lines(path, &fixed)?;
    Ok(removed)
}

/// Rewrite a JSON-lines chat transcript in place, sweeping the text fields
/// of each message record.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite_chat(path: &Path, opts: &CleanOptions) -> std::io::Result<usize> {
    let lines = read_lines(path)?;
    if lines.is_empty() {
        return Ok(0);
    }
    let (fixed, removed) = sweep_lines(&lines, opts);
    write_lines(path, &fixed)?;
    Ok(removed)
}
