//! Comment content validation

use crate::error::ValidationError;

pub const MIN_COMMENT_LENGTH: usize = 3;
pub const MAX_COMMENT_LENGTH: usize = 4000;

/// Validate comment content before creation.
///
/// Length is counted in Unicode scalar values. The content is checked as
/// submitted; trimming is presentation policy and stays with the caller.
pub fn validate_comment_content(content: &str) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::MissingContent);
    }

    let length = content.chars().count();
    if !(MIN_COMMENT_LENGTH..=MAX_COMMENT_LENGTH).contains(&length) {
        return Err(ValidationError::ContentLength { length });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(
            validate_comment_content(""),
            Err(ValidationError::MissingContent)
        );
    }

    #[test]
    fn test_too_short_rejected() {
        assert_eq!(
            validate_comment_content("hi"),
            Err(ValidationError::ContentLength { length: 2 })
        );
    }

    #[test]
    fn test_too_long_rejected() {
        let content = "a".repeat(MAX_COMMENT_LENGTH + 1);
        assert_eq!(
            validate_comment_content(&content),
            Err(ValidationError::ContentLength {
                length: MAX_COMMENT_LENGTH + 1
            })
        );
    }

    #[test]
    fn test_boundaries_accepted() {
        assert!(validate_comment_content("abc").is_ok());
        assert!(validate_comment_content(&"a".repeat(MAX_COMMENT_LENGTH)).is_ok());
    }

    #[test]
    fn test_multibyte_content_counted_by_chars() {
        // Three scalar values, nine bytes.
        assert!(validate_comment_content("日本語").is_ok());
    }
}
