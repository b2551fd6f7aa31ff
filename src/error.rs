use thiserror::Error;

/// Errors reported by the checked entry points ([`try_dedent`](crate::try_dedent)
/// and [`Template::from_parts`](crate::Template::from_parts)).
///
/// The unchecked [`dedent`](crate::dedent) never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DedentError {
    #[error("template requires at least one literal fragment")]
    EmptyTemplate,
    #[error("template has {fragments} literal fragments for {values} values; fragments must outnumber values by one")]
    FragmentCountMismatch { fragments: usize, values: usize },
}
