//! Indentation-aware dedent for multi-line templates.
//!
//! Write a block of text indented to match the surrounding code and get back
//! the text without that indentation. Interpolated values that span several
//! lines are re-indented to the column they were inserted at, so generated
//! content lines up with the literal text around it.
//!
//! ## What we do
//!
//! - Join literal fragments with rendered values (see [`Value`])
//! - Re-indent lines 2.. of each multi-line value to its insertion column
//! - Drop a blank first line and a blank last line
//! - Strip the smallest leading-space run shared by all content lines
//!
//! ## Pure function guarantee
//!
//! No I/O, no global state, no locale dependence. Only U+0020 counts as
//! indentation; tabs are content.
//!
//! ## Invariants worth knowing
//!
//! - A template has exactly one more literal fragment than values
//! - Blank lines never lower the common indent
//! - Interior blank lines are kept verbatim
//! - A template that is a single blank line dedents to `""`
//!
//! ```rust
//! use heredoc::heredoc;
//!
//! let story = "I sit at the mat.\nAt the mat, I nap.";
//! let prompt = heredoc!("
//!     Here is an example story.
//!
//!     <example>
//!     " {story} "
//!     </example>
//! ");
//!
//! assert_eq!(
//!     prompt,
//!     "Here is an example story.\n\n<example>\nI sit at the mat.\nAt the mat, I nap.\n</example>"
//! );
//! ```

mod config;
mod error;
mod join;
#[macro_use]
mod macros;
mod pipeline;
mod template;
mod value;
mod whitespace;

pub use crate::config::DedentOptions;
pub use crate::error::DedentError;
pub use crate::join::{join_segments, line_padding};
pub use crate::pipeline::{dedent, dedent_with, try_dedent};
pub use crate::template::Template;
pub use crate::value::{Number, Value};
pub use crate::whitespace::{
    is_blank, leading_spaces, smallest_indent, strip_indent, trim_blank_edges,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_heredoc_default() {
        let out = heredoc!("
            Hello, world!
        ");
        assert_eq!(out, "Hello, world!");
    }

    #[test]
    fn interpolation_inside_line() {
        let out = heredoc!("
            Hello, " {"world"} "!
        ");
        assert_eq!(out, "Hello, world!");
    }

    #[test]
    fn interpolation_at_both_ends() {
        let out = heredoc!({"Start"} " middle " {"End"});
        assert_eq!(out, "Start middle End");
    }

    #[test]
    fn several_interpolations_in_one_line() {
        let out = heredoc!(
            "This is a " {"test"} " with multiple " {"interpolations"} " in a " {"line"} "."
        );
        assert_eq!(out, "This is a test with multiple interpolations in a line.");
    }

    #[test]
    fn non_text_values() {
        let out = heredoc!(
            "Number: " {42} ", Boolean: " {true} ", Null: " {Value::Null} ", Undefined: " {Value::Undefined}
        );
        assert_eq!(out, "Number: 42, Boolean: true, Null: , Undefined: ");
    }

    #[test]
    fn nested_calls() {
        let out = heredoc!("
            Start
            " {heredoc!("
              Indented
              Some
              More
            ")} "
            End
        ");
        assert_eq!(out, "Start\nIndented\nSome\nMore\nEnd");
    }

    #[test]
    fn empty_macro_call() {
        assert_eq!(heredoc!(), "");
    }

    #[test]
    fn template_and_slices_agree() {
        let template = Template::new()
            .literal("\n    a\n    ")
            .value("b\nc")
            .literal("\n");
        let (fragments, values) = template.clone().into_parts();
        assert_eq!(template.dedent(), dedent(fragments.as_slice(), &values));
        assert_eq!(template.dedent(), "a\nb\nc");
    }
}
