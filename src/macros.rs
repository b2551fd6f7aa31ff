/// Tagged-template style dedent.
///
/// String literals are literal fragments; `{expr}` groups are interpolated
/// values, converted with [`Into<Value>`](crate::Value). Expands to a
/// [`Template`](crate::Template) and returns its dedented `String`.
///
/// ```rust
/// use heredoc::heredoc;
///
/// let items = ["one", "two"]
///     .iter()
///     .map(|s| format!("<li>{s}</li>"))
///     .collect::<Vec<_>>()
///     .join("\n");
///
/// let html = heredoc!("
///     <ul>
///       " {items} "
///     </ul>
/// ");
/// assert_eq!(html, "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>");
/// ```
#[macro_export]
macro_rules! heredoc {
    ($($part:tt)*) => {{
        #[allow(unused_mut)]
        let mut template = $crate::Template::new();
        $( $crate::__heredoc_part!(template, $part); )*
        template.dedent()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __heredoc_part {
    ($template:ident, { $value:expr }) => {
        $template.push_value($value)
    };
    ($template:ident, $literal:literal) => {
        $template.push_literal($literal)
    };
}
