use tracing::{trace, warn, Level};

use crate::config::DedentOptions;
use crate::error::DedentError;
use crate::join::join_segments;
use crate::value::Value;
use crate::whitespace::{smallest_indent, strip_indent, trim_blank_edges};

/// Main entry point. Joins `fragments` with `values` and removes the common
/// indentation.
///
/// Fragment `i` is followed by value `i`. The call is total: a fragment with
/// no value is followed by nothing and surplus values are dropped. Use
/// [`try_dedent`] to reject such shapes instead.
///
/// ```rust
/// use heredoc::{dedent, Value};
///
/// let out = dedent(
///     &["\n    Hello, ", "!\n      Bye.\n"],
///     &[Value::from("world")],
/// );
/// assert_eq!(out, "Hello, world!\n  Bye.");
/// ```
pub fn dedent<S: AsRef<str>>(fragments: &[S], values: &[Value]) -> String {
    dedent_with(fragments, values, &DedentOptions::default())
}

/// [`dedent`] with explicit options.
pub fn dedent_with<S: AsRef<str>>(
    fragments: &[S],
    values: &[Value],
    opts: &DedentOptions,
) -> String {
    let span = tracing::span!(
        Level::TRACE,
        "heredoc.dedent",
        fragments = fragments.len(),
        values = values.len()
    );
    let _guard = span.enter();

    let joined = join_segments(fragments, values, opts.reindent_values);
    let lines: Vec<&str> = joined.split('\n').collect();

    let body = if opts.trim_blank_edges {
        trim_blank_edges(lines.as_slice())
    } else {
        &lines[..]
    };

    let indent = smallest_indent(body).unwrap_or(0);
    trace!(
        joined_len = joined.len(),
        line_count = lines.len(),
        kept_lines = body.len(),
        common_indent = indent,
        "dedent_measured"
    );

    strip_indent(body, indent).join("\n")
}

/// Checked variant of [`dedent`].
///
/// Fails when there are no fragments or when the fragment count is not
/// exactly one more than the value count.
pub fn try_dedent<S: AsRef<str>>(
    fragments: &[S],
    values: &[Value],
) -> Result<String, DedentError> {
    if let Err(err) = check_shape(fragments.len(), values.len()) {
        warn!(error = %err, "dedent_rejected");
        return Err(err);
    }
    Ok(dedent(fragments, values))
}

pub(crate) fn check_shape(fragments: usize, values: usize) -> Result<(), DedentError> {
    if fragments == 0 {
        return Err(DedentError::EmptyTemplate);
    }
    if fragments != values + 1 {
        return Err(DedentError::FragmentCountMismatch { fragments, values });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_indented_line() {
        assert_eq!(dedent(&["\n        Hello, world!\n      "], &[]), "Hello, world!");
    }

    #[test]
    fn relative_indent_survives() {
        let input = "\n        Hello, world!\n          This is a test.\n      ";
        assert_eq!(dedent(&[input], &[]), "Hello, world!\n  This is a test.");
    }

    #[test]
    fn single_blank_line_becomes_empty() {
        assert_eq!(dedent(&["    "], &[]), "");
        assert_eq!(dedent(&[""], &[]), "");
    }

    #[test]
    fn no_fragments_yields_empty() {
        assert_eq!(dedent::<&str>(&[], &[]), "");
    }

    #[test]
    fn trim_disabled_keeps_edges() {
        let opts = DedentOptions {
            trim_blank_edges: false,
            ..Default::default()
        };
        // The trailing "  " is shorter than the indent and stays as-is.
        assert_eq!(dedent_with(&["\n    a\n  "], &[], &opts), "\na\n  ");
    }

    #[test]
    fn reindent_disabled_lowers_common_indent() {
        let opts = DedentOptions {
            reindent_values: false,
            ..Default::default()
        };
        let out = dedent_with(&["\n    ", "\n"], &[Value::from("a\nb")], &opts);
        assert_eq!(out, "    a\nb");
    }

    #[test]
    fn try_dedent_rejects_bad_shapes() {
        assert_eq!(
            try_dedent::<&str>(&[], &[]),
            Err(DedentError::EmptyTemplate)
        );
        assert_eq!(
            try_dedent(&["a", "b"], &[]),
            Err(DedentError::FragmentCountMismatch {
                fragments: 2,
                values: 0
            })
        );
        assert_eq!(
            try_dedent(&["  a ", ""], &[Value::from(1)]),
            Ok("a 1".to_string())
        );
    }
}
