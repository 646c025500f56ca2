use crate::error::ValidationError;

/// Check text length in characters against `[min_length, max_length]`
pub fn validate_text(
    text: &str,
    min_length: usize,
    max_length: usize,
) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = text.chars().count();
    if length < min_length {
        return Err(ValidationError::TooShort(min_length));
    }
    if length > max_length {
        return Err(ValidationError::TooLong(max_length));
    }

    Ok(())
}
