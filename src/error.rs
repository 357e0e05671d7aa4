//! Error types for formatting.

use thiserror::Error;

/// Errors that can occur when rendering a composite format string.
///
/// Template parsing itself never fails: ill-formed placeholders render as
/// literal text. Both error kinds here are raised while resolving a
/// placeholder's argument, and abort the whole format call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing argument: placeholder references argument {index} but {supplied} were supplied")]
    MissingArgument { index: usize, supplied: usize },

    #[error("invalid path selector '{path}'")]
    InvalidPath { path: String },
}
