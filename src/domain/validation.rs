use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty input, naming `field` in the error. The value is returned unchanged.
pub fn require_non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, require_non_empty};

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "apiKey" };
        assert_eq!(err.to_string(), "apiKey must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }

    #[test]
    fn require_non_empty_names_the_field() {
        assert_eq!(
            require_non_empty(String::new(), "domain"),
            Err(ValidationError::Empty { field: "domain" })
        );
        assert_eq!(
            require_non_empty(" \t ".to_owned(), "text").as_deref(),
            Ok(" \t ")
        );
        assert_eq!(
            require_non_empty(" hi ".to_owned(), "text").as_deref(),
            Ok(" hi ")
        );
    }
}
