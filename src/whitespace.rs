//! Line-level whitespace handling.
//!
//! The three line passes of the dedent pipeline:
//!
//! 1. [`trim_blank_edges`] drops a blank first line and a blank last line
//! 2. [`smallest_indent`] finds the common indent of the content lines
//! 3. [`strip_indent`] removes that indent from every line that has it
//!
//! # Whitespace Definition
//!
//! Two notions are in play:
//!
//! - A *blank* line (for edge trimming) is empty or made only of Unicode
//!   whitespace, so `"\t \r"` is blank.
//! - *Indentation* is only ever the ASCII space (U+0020). A tab counts as
//!   content for indent detection and is never stripped.
//!
//! # Examples
//!
//! ```rust
//! use heredoc::{smallest_indent, strip_indent, trim_blank_edges};
//!
//! let lines = ["", "    a", "      b", "  "];
//! let body = trim_blank_edges(&lines);
//! assert_eq!(body, ["    a", "      b"]);
//!
//! let indent = smallest_indent(body).unwrap_or(0);
//! assert_eq!(strip_indent(body, indent), ["a", "  b"]);
//! ```

/// True when `line` is empty or contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Returns `lines` without a blank first line and without a blank last line.
///
/// The two checks are independent. A single blank line is both first and
/// last and is dropped once, leaving an empty slice. Interior blank lines are
/// never touched.
///
/// # Examples
///
/// ```rust
/// use heredoc::trim_blank_edges;
///
/// assert_eq!(trim_blank_edges(&["", "a", "", "b", " "]), ["a", "", "b"]);
/// assert!(trim_blank_edges(&["   "]).is_empty());
/// assert_eq!(trim_blank_edges(&["a"]), ["a"]);
/// ```
pub fn trim_blank_edges<'a, S: AsRef<str>>(lines: &'a [S]) -> &'a [S] {
    let start = match lines.first() {
        Some(first) if is_blank(first.as_ref()) => 1,
        _ => 0,
    };
    let end = match lines.last() {
        Some(last) if is_blank(last.as_ref()) => lines.len() - 1,
        _ => lines.len(),
    };

    // Both checks can hit the same line; `start` then exceeds `end`.
    if start >= end {
        &lines[..0]
    } else {
        &lines[start..end]
    }
}

/// Leading U+0020 count of `line`, or `None` when the line has no other
/// character.
pub fn leading_spaces(line: &str) -> Option<usize> {
    line.bytes().position(|b| b != b' ')
}

/// Smallest leading-space count over lines that contain a non-space
/// character.
///
/// Space-only and empty lines are skipped. Returns `None` when no line has
/// content; callers treat that as an indent of zero.
///
/// # Examples
///
/// ```rust
/// use heredoc::smallest_indent;
///
/// assert_eq!(smallest_indent(&["    a", "", "  ", "      b"]), Some(4));
/// assert_eq!(smallest_indent(&["\tx", "    y"]), Some(0));
/// assert_eq!(smallest_indent(&["   ", ""]), None);
/// ```
pub fn smallest_indent<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .filter_map(|line| leading_spaces(line.as_ref()))
        .min()
}

/// Removes exactly `indent` leading spaces from every line that starts with
/// at least that many. Shorter lines are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use heredoc::strip_indent;
///
/// assert_eq!(strip_indent(&["    a", "  ", "      b"], 4), ["a", "  ", "  b"]);
/// ```
pub fn strip_indent<S: AsRef<str>>(lines: &[S], indent: usize) -> Vec<&str> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            match line.get(..indent) {
                Some(prefix) if prefix.bytes().all(|b| b == b' ') => &line[indent..],
                _ => line,
            }
        })
        .collect()
}
