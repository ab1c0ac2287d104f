//! The core cleaning transformation.
//!
//! [`clean`] removes ellipsis-like runs from message text in four phases:
//! protected regions are masked to placeholder tokens, a run pattern is
//! selected from the options, runs are removed in one left-to-right scan
//! (with special-casing next to quotation and emphasis marks), and the
//! masked regions are restored verbatim. The function is pure and
//! idempotent: cleaning already-clean text removes nothing.
//!
//! Quote- and digit-adjacency are decided at match offsets rather than in
//! the pattern itself; a single scan also guarantees a run consumed by the
//! quote/emphasis special-casing is never counted twice.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CleanOptions;
use crate::lazy_regex;
use crate::mask::Masker;
use crate::pattern::RunPolicy;

static DOUBLED_SPACE_RE: LazyLock<Regex> = lazy_regex!(r" {2,}", "doubled space pattern");

static EXCESS_NEWLINE_RE: LazyLock<Regex> = lazy_regex!(r"\n{3,}", "excess newline pattern");

/// Outcome of one cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanOutcome {
    /// The cleaned text.
    pub text: String,
    /// Characters deleted, replacement spaces notwithstanding.
    pub removed: usize,
}

/// Quotation and emphasis marks that suppress the replacement space.
const MARKS: [char; 3] = ['"', '\'', '*'];

fn prev_char(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

fn next_char(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

/// Start of the horizontal-whitespace run ending at `at`.
fn ws_start_before(text: &str, mut at: usize) -> usize {
    let bytes = text.as_bytes();
    while at > 0 && matches!(bytes[at - 1], b' ' | b'\t') {
        at -= 1;
    }
    at
}

/// End of the horizontal-whitespace run starting at `at`.
fn ws_end_after(text: &str, mut at: usize) -> usize {
    let bytes = text.as_bytes();
    while at < bytes.len() && matches!(bytes[at], b' ' | b'\t') {
        at += 1;
    }
    at
}

/// Remove ellipsis runs from already-masked text.
fn remove_runs(text: &str, opts: &CleanOptions) -> (String, usize) {
    let policy = RunPolicy::from_options(opts);
    let mut out = String::with_capacity(text.len());
    let mut removed = 0usize;
    let mut last = 0usize;

    for m in policy.regex().find_iter(text) {
        let (start, end) = (m.start(), m.end());

        let literal_dots = text.as_bytes()[start] == b'.';
        if literal_dots && policy.guards_digits() {
            let digit_before = prev_char(text, start).is_some_and(|c| c.is_ascii_digit());
            let digit_after = next_char(text, end).is_some_and(|c| c.is_ascii_digit());
            if digit_before || digit_after {
                continue;
            }
        }

        removed += m.as_str().chars().count();

        let lead_ws = ws_start_before(text, start);
        let trail_ws = ws_end_after(text, end);
        let mark_before = prev_char(text, lead_ws).is_some_and(|c| MARKS.contains(&c));
        let mark_after = next_char(text, trail_ws).is_some_and(|c| MARKS.contains(&c));

        if mark_before || mark_after {
            // Abutting a quote or emphasis mark the run goes outright,
            // together with the whitespace between it and the mark.
            let cut_start = if mark_before { lead_ws } else { start };
            let cut_end = if mark_after { trail_ws } else { end };
            removed += start - cut_start + (cut_end - end);
            out.push_str(&text[last..cut_start]);
            last = cut_end;
        } else if opts.preserve_space {
            out.push_str(&text[last..start]);
            let ws_before = prev_char(text, start).is_none_or(char::is_whitespace);
            let ws_after = next_char(text, end).is_none_or(char::is_whitespace);
            if !ws_before && !ws_after {
                out.push(' ');
            }
            last = end;
        } else {
            removed += trail_ws - end;
            out.push_str(&text[last..start]);
            last = trail_ws;
        }
    }

    if last == 0 {
        return (text.to_string(), removed);
    }
    out.push_str(&text[last..]);
    (out, removed)
}

/// Collapse doubled spaces and excess blank lines.
fn tidy(text: &str) -> String {
    let spaced = DOUBLED_SPACE_RE.replace_all(text, " ");
    EXCESS_NEWLINE_RE.replace_all(&spaced, "\n\n").into_owned()
}

/// Remove ellipsis-like runs from `text` under the given options.
///
/// Fenced code blocks, inline code spans, and (when enabled) HTML markup
/// are never modified. Runs next to `"`, `'`, or `*` are deleted without a
/// replacement space. The returned count covers every character deleted,
/// whether or not a space was inserted in its place.
///
/// # Examples
///
/// ```
/// use unellipsis::{CleanOptions, clean};
///
/// let opts = CleanOptions {
///     two_dots: true,
///     ..CleanOptions::default()
/// };
/// let outcome = clean("Hello... world `code...`", &opts);
/// assert_eq!(outcome.text, "Hello world `code...`");
/// assert_eq!(outcome.removed, 3);
/// ```
#[must_use]
pub fn clean(text: &str, opts: &CleanOptions) -> CleanOutcome {
    if text.is_empty() {
        return CleanOutcome::default();
    }

    let mut masker = Masker::new();
    let masked = masker.mask(text, opts);
    let (stripped, removed) = remove_runs(&masked, opts);
    let stripped = if opts.tidy_whitespace {
        tidy(&stripped)
    } else {
        stripped
    };

    CleanOutcome {
        text: masker.restore(&stripped),
        removed,
    }
}

/// Clean a document given as lines.
///
/// Joins on `\n`, cleans once, and splits back, so fenced blocks spanning
/// lines are protected as a whole.
///
/// # Examples
///
/// ```
/// use unellipsis::{CleanOptions, clean_stream};
///
/// let lines = vec!["wait...".to_string()];
/// let (out, removed) = clean_stream(&lines, &CleanOptions::default());
/// assert_eq!(out, vec!["wait".to_string()]);
/// assert_eq!(removed, 3);
/// ```
#[must_use]
pub fn clean_stream(lines: &[String], opts: &CleanOptions) -> (Vec<String>, usize) {
    if lines.is_empty() {
        return (Vec::new(), 0);
    }
    let outcome = clean(&lines.join("\n"), opts);
    let out = outcome.text.split('\n').map(str::to_string).collect();
    (out, outcome.removed)
}
