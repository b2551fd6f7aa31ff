//! Segment joining.
//!
//! Concatenates literal fragments with their rendered values. A multi-line
//! value inherits the indentation of the line it is interpolated into: every
//! line of the value after the first is prefixed with the spaces that precede
//! the interpolation point, so
//!
//! ```text
//! "<ul>\n  " + "<li>a</li>\n<li>b</li>" + "\n</ul>"
//! ```
//!
//! joins to
//!
//! ```text
//! <ul>
//!   <li>a</li>
//!   <li>b</li>
//! </ul>
//! ```

use crate::value::Value;

/// Width of the space-only run that ends `fragment`.
///
/// Looks at the fragment's last line (everything after the final `\n`, or the
/// whole fragment). If that line is non-empty and made only of U+0020, its
/// length is the padding; anything else (text, tabs, an empty line) gives 0.
///
/// ```rust
/// use heredoc::line_padding;
///
/// assert_eq!(line_padding("Start\n    "), 4);
/// assert_eq!(line_padding("    Hello, "), 0);
/// assert_eq!(line_padding("Start\n"), 0);
/// assert_eq!(line_padding("\t"), 0);
/// ```
pub fn line_padding(fragment: &str) -> usize {
    let last_line = fragment.rsplit('\n').next().unwrap_or(fragment);
    if last_line.bytes().all(|b| b == b' ') {
        last_line.len()
    } else {
        0
    }
}

/// Joins `fragments` with `values`, fragment `i` followed by value `i`.
///
/// A fragment without a matching value is followed by nothing, and values
/// past the last fragment are ignored, so this never fails on a malformed
/// shape. When `reindent` is set, lines after the first of each value get the
/// preceding fragment's [`line_padding`].
pub fn join_segments<S: AsRef<str>>(fragments: &[S], values: &[Value], reindent: bool) -> String {
    let capacity = fragments.iter().map(|f| f.as_ref().len()).sum::<usize>()
        + values.len() * 8;
    let mut joined = String::with_capacity(capacity);

    for (idx, fragment) in fragments.iter().enumerate() {
        let fragment = fragment.as_ref();
        joined.push_str(fragment);

        let Some(value) = values.get(idx) else {
            continue;
        };
        let rendered = value.render();
        let padding = if reindent { line_padding(fragment) } else { 0 };
        push_padded(&mut joined, &rendered, padding);
    }

    joined
}

/// Appends `text`, inserting `padding` spaces after every newline in it.
fn push_padded(out: &mut String, text: &str, padding: usize) {
    if padding == 0 {
        out.push_str(text);
        return;
    }

    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(line);
    }
}
