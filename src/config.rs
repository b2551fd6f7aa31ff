//! Configuration types for the dedent pipeline.
//!
//! [`DedentOptions`] toggles the optional stages. The defaults reproduce the
//! behavior of [`dedent`](crate::dedent) exactly, which never takes options.
//!
//! # Examples
//!
//! ```rust
//! use heredoc::{dedent_with, DedentOptions};
//!
//! let opts = DedentOptions {
//!     trim_blank_edges: false,
//!     ..Default::default()
//! };
//! assert_eq!(dedent_with(&["\n  kept\n"], &[], &opts), "\nkept\n");
//! ```

use serde::{Deserialize, Serialize};

/// Options for [`dedent_with`](crate::dedent_with).
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```json
/// {
///   "trim_blank_edges": true,
///   "reindent_values": true
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DedentOptions {
    /// Drop a blank first line and a blank last line before measuring indent.
    ///
    /// # Default
    ///
    /// `true`
    pub trim_blank_edges: bool,

    /// Prefix every line after the first of a multi-line value with the
    /// spaces that precede its interpolation point.
    ///
    /// With this disabled, a multi-line value is spliced in verbatim and its
    /// later lines usually end up less indented than the surrounding block,
    /// which lowers the common indent for the whole template.
    ///
    /// # Default
    ///
    /// `true`
    pub reindent_values: bool,
}

impl Default for DedentOptions {
    fn default() -> Self {
        Self {
            trim_blank_edges: true,
            reindent_values: true,
        }
    }
}
