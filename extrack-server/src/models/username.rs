//! Username validation

use super::ValidationError;

/// Maximum length for usernames
const MAX_USERNAME_LEN: usize = 64;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 64 characters
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::Username;
    ///
    /// assert_eq!(Username::new("  alice ").unwrap().as_str(), "alice");
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        if s.chars().count() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
