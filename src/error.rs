use thiserror::Error;

use crate::interactions::{MAX_COMMENT_LENGTH, MIN_COMMENT_LENGTH};

/// Errors produced when validating user-supplied interaction input.
///
/// The thread builder itself is total and never fails; validation of the
/// content that goes *into* a comment is the one place this crate has an
/// error taxonomy. The surrounding request layer maps these onto its own
/// HTTP error responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("comment is required")]
    MissingContent,

    #[error(
        "comment must be between {MIN_COMMENT_LENGTH} and {MAX_COMMENT_LENGTH} characters, got {length}"
    )]
    ContentLength { length: usize },
}
