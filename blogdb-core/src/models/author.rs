//! Author name and password validation

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for author names
const MAX_NAME_LEN: usize = 64;

/// Maximum length for author passwords
const MAX_PASSWORD_LEN: usize = 128;

/// Rejects control characters (newlines, tabs, NUL, ...)
static PRINTABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("invalid printable regex"));

/// Validated author name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorName(String);

impl AuthorName {
    /// Create a new author name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 64 characters
    /// - No control characters
    ///
    /// # Example
    /// ```
    /// use blogdb_core::models::AuthorName;
    ///
    /// assert!(AuthorName::new("user1").is_ok());
    /// assert!(AuthorName::new("   ").is_err());
    /// assert!(AuthorName::new("bad\nname").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "author name",
            });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "author name",
                max: MAX_NAME_LEN,
            });
        }

        if !PRINTABLE_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "author name",
                reason: "must not contain control characters",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author password, stored as given.
///
/// Never printed: `Debug` shows `***` so passwords stay out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorPassword(String);

impl AuthorPassword {
    /// Create a password. Whitespace is significant and not trimmed.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        if s.chars().count() > MAX_PASSWORD_LEN {
            return Err(ValidationError::TooLong {
                field: "password",
                max: MAX_PASSWORD_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the raw password for binding into a statement.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(AuthorName::new("user1").is_ok());
        assert!(AuthorName::new("Ada Lovelace").is_ok());
        assert!(AuthorName::new("a").is_ok());
        assert_eq!(AuthorName::new("  padded  ").unwrap().as_str(), "padded");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            AuthorName::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            AuthorName::new(" \t ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn rejects_control_characters() {
        let err = AuthorName::new("user\u{0}1").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn name_max_length_counts_chars() {
        let name_64 = "é".repeat(64);
        assert!(AuthorName::new(&name_64).is_ok());

        let name_65 = "é".repeat(65);
        let err = AuthorName::new(&name_65).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }

    #[test]
    fn password_keeps_whitespace() {
        let password = AuthorPassword::new(" secret ").unwrap();
        assert_eq!(password.expose(), " secret ");
    }

    #[test]
    fn password_rejects_empty_and_long() {
        assert!(matches!(
            AuthorPassword::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        let long = "x".repeat(129);
        assert!(matches!(
            AuthorPassword::new(&long).unwrap_err(),
            ValidationError::TooLong { max: 128, .. }
        ));
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = AuthorPassword::new("user123").unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("user123"));
        assert!(debug.contains("***"));
    }
}
