//! Error types for format lookup.
//!
//! Masking itself never fails: empty, over-long or garbage input is reshaped
//! by truncation and partial rendering. The only failure is asking for a
//! format by a tag that is not in the rule table.

use std::fmt;

/// Errors that can occur when resolving a format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The requested format tag is not in the rule table.
    UnknownFormat {
        /// The tag exactly as it was supplied.
        id: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat { id } => {
                write!(
                    f,
                    "unknown format '{}' - run `keymask list` for the supported formats",
                    id.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}
