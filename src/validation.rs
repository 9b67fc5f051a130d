use crate::error::SubmitError;

/// Trim a raw question and check it is long enough to bother the oracle with.
/// Length is counted in characters, not bytes.
pub fn validate_question(raw: &str, min_len: usize) -> Result<&str, SubmitError> {
    let question = raw.trim();
    if question.is_empty() {
        return Err(SubmitError::Empty);
    }
    if question.chars().count() < min_len {
        return Err(SubmitError::TooShort { min: min_len });
    }
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_are_rejected() {
        assert!(matches!(validate_question("", 3), Err(SubmitError::Empty)));
        assert!(matches!(validate_question(" \t\n", 3), Err(SubmitError::Empty)));
    }

    #[test]
    fn short_is_rejected() {
        assert!(matches!(
            validate_question(" ab ", 3),
            Err(SubmitError::TooShort { min: 3 })
        ));
    }

    #[test]
    fn length_counts_characters() {
        // two characters, four bytes
        assert!(validate_question("é?", 3).is_err());
        assert_eq!(validate_question("não", 3).unwrap(), "não");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_question("  vai dar certo?  ", 3).unwrap(), "vai dar certo?");
    }

    #[test]
    fn zero_minimum_accepts_any_non_blank() {
        assert_eq!(validate_question("x", 0).unwrap(), "x");
    }
}
