//! Template parts.
//!
//! A [`Template`] is the Rust stand-in for a tagged template call: literal
//! fragments interleaved with interpolated [`Value`]s. The builder keeps the
//! fragment count at exactly one more than the value count at all times.
//!
//! # Examples
//!
//! ```rust
//! use heredoc::Template;
//!
//! let out = Template::new()
//!     .literal("\n    Objective ")
//!     .value(1)
//!     .literal(":\n    ")
//!     .value("  1. one\n  2. two")
//!     .literal("\n")
//!     .dedent();
//!
//! assert_eq!(out, "Objective 1:\n  1. one\n  2. two");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::DedentOptions;
use crate::error::DedentError;
use crate::pipeline;
use crate::value::Value;

/// Literal fragments and the values between them.
///
/// Invariant: `fragments.len() == values.len() + 1`. Deserialization goes
/// through [`Template::from_parts`], so it holds for serialized input too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawTemplate")]
pub struct Template {
    fragments: Vec<String>,
    values: Vec<Value>,
}

impl Template {
    /// An empty template: one empty fragment, no values.
    pub fn new() -> Self {
        Self {
            fragments: vec![String::new()],
            values: Vec::new(),
        }
    }

    /// Builds a template from already-split parts, checking the shape.
    pub fn from_parts<S: Into<String>>(
        fragments: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, DedentError> {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let values: Vec<Value> = values.into_iter().collect();
        pipeline::check_shape(fragments.len(), values.len())?;
        Ok(Self { fragments, values })
    }

    /// Appends literal text to the current fragment.
    pub fn push_literal(&mut self, literal: &str) {
        // `fragments` is never empty, see the invariant above.
        if let Some(current) = self.fragments.last_mut() {
            current.push_str(literal);
        }
    }

    /// Closes the current fragment with `value` and starts a new, empty one.
    pub fn push_value(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
        self.fragments.push(String::new());
    }

    pub fn literal(mut self, literal: &str) -> Self {
        self.push_literal(literal);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.push_value(value);
        self
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Splits the template back into its parts.
    pub fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.fragments, self.values)
    }

    /// Runs the dedent pipeline with default options.
    pub fn dedent(&self) -> String {
        self.dedent_with(&DedentOptions::default())
    }

    pub fn dedent_with(&self, opts: &DedentOptions) -> String {
        pipeline::dedent_with(self.fragments.as_slice(), &self.values, opts)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct RawTemplate {
    fragments: Vec<String>,
    values: Vec<Value>,
}

impl TryFrom<RawTemplate> for Template {
    type Error = DedentError;

    fn try_from(raw: RawTemplate) -> Result<Self, Self::Error> {
        Template::from_parts(raw.fragments, raw.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_template_has_one_empty_fragment() {
        let template = Template::new();
        assert_eq!(template.fragments(), [String::new()]);
        assert!(template.values().is_empty());
        assert_eq!(template.dedent(), "");
    }

    #[test]
    fn adjacent_literals_merge() {
        let template = Template::new().literal("a").literal("b");
        assert_eq!(template.fragments(), ["ab".to_string()]);
    }

    #[test]
    fn adjacent_values_get_empty_fragment_between() {
        let template = Template::new().value(1).value(2);
        assert_eq!(template.fragments().len(), 3);
        assert_eq!(template.values().len(), 2);
        assert_eq!(template.dedent(), "12");
    }

    #[test]
    fn from_parts_checks_shape() {
        let ok = Template::from_parts(["a", "b"], [Value::from(1)]);
        assert!(ok.is_ok());

        let bad = Template::from_parts(["a"], [Value::from(1)]);
        assert_eq!(
            bad,
            Err(DedentError::FragmentCountMismatch {
                fragments: 1,
                values: 1
            })
        );

        let empty = Template::from_parts(Vec::<String>::new(), Vec::new());
        assert_eq!(empty, Err(DedentError::EmptyTemplate));
    }

    #[test]
    fn deserialize_rejects_bad_shape() {
        let json = r#"{"fragments":["a"],"values":[{"bool":true}]}"#;
        assert!(serde_json::from_str::<Template>(json).is_err());

        let json = r#"{"fragments":["a","b"],"values":[{"bool":true}]}"#;
        let template: Template = serde_json::from_str(json).expect("valid template");
        assert_eq!(template.dedent(), "atrueb");
    }

    #[test]
    fn into_parts_round_trips() {
        let template = Template::new().literal("x").value(true).literal("y");
        let (fragments, values) = template.clone().into_parts();
        assert_eq!(Template::from_parts(fragments, values), Ok(template));
    }
}
