//! Blog title and content validation

use super::ValidationError;

/// Maximum length for blog titles
const MAX_TITLE_LEN: usize = 256;

/// Maximum length for blog content
const MAX_CONTENT_LEN: usize = 100_000;

/// Validated blog title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    /// Create a new blog title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    ///
    /// # Example
    /// ```
    /// use blogdb_core::models::BlogTitle;
    ///
    /// assert!(BlogTitle::new("Blog title").is_ok());
    /// assert!(BlogTitle::new("").is_err());
    /// assert!(BlogTitle::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BlogTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated blog content
///
/// Content is stored as given; only the emptiness check ignores
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent(String);

impl BlogContent {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        if s.chars().count() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BlogContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_titles() {
        assert!(BlogTitle::new("Blog title").is_ok());
        assert!(BlogTitle::new("a").is_ok());
        assert_eq!(BlogTitle::new("  Trimmed  ").unwrap().as_str(), "Trimmed");
    }

    #[test]
    fn rejects_empty_title() {
        assert!(matches!(
            BlogTitle::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn title_max_length() {
        let title_256 = "a".repeat(256);
        assert!(BlogTitle::new(&title_256).is_ok());

        let title_257 = "a".repeat(257);
        assert!(matches!(
            BlogTitle::new(&title_257).unwrap_err(),
            ValidationError::TooLong { max: 256, .. }
        ));
    }

    #[test]
    fn content_is_not_trimmed() {
        let content = BlogContent::new("  its a demo blog content\n").unwrap();
        assert_eq!(content.as_str(), "  its a demo blog content\n");
    }

    #[test]
    fn rejects_blank_content() {
        assert!(matches!(
            BlogContent::new("\n\t ").unwrap_err(),
            ValidationError::Empty { field: "content" }
        ));
    }

    #[test]
    fn content_max_length() {
        let huge = "x".repeat(100_001);
        assert!(matches!(
            BlogContent::new(&huge).unwrap_err(),
            ValidationError::TooLong { max: 100_000, .. }
        ));
    }
}
