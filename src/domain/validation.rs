/// Required-argument guards
///
/// Callers that need a value present (or non-empty) get a typed error
/// naming the argument instead of a panic deep inside the operation.

/// A required argument was not usable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("required argument missing: {0}")]
    Missing(&'static str),

    #[error("required argument empty: {0}")]
    Empty(&'static str),
}

/// Unwraps an optional argument or reports which one was missing
pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T, ArgumentError> {
    value.ok_or(ArgumentError::Missing(name))
}

/// Rejects empty or whitespace-only string arguments
pub fn require_non_empty<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ArgumentError> {
    if value.trim().is_empty() {
        Err(ArgumentError::Empty(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        assert_eq!(require(Some(42), "answer"), Ok(42));
    }

    #[test]
    fn test_require_missing_names_the_argument() {
        let err = require::<u32>(None, "answer").unwrap_err();
        assert_eq!(err, ArgumentError::Missing("answer"));
        assert_eq!(err.to_string(), "required argument missing: answer");
    }

    #[test]
    fn test_require_non_empty_passes_through() {
        assert_eq!(require_non_empty("duck", "name"), Ok("duck"));
    }

    #[test]
    fn test_require_non_empty_rejects_blank() {
        assert_eq!(
            require_non_empty("   ", "name"),
            Err(ArgumentError::Empty("name"))
        );
    }
}
