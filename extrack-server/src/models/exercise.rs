//! Exercise field validation

use super::ValidationError;

/// Maximum length for exercise descriptions
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Validated exercise description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Create a new description.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 1024 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }

        if s.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
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

/// Exercise duration in minutes, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(i64);

impl Minutes {
    /// Parse a duration from request input.
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::Minutes;
    ///
    /// assert_eq!(Minutes::parse("30").unwrap().get(), 30);
    /// assert!(Minutes::parse("thirty").is_err());
    /// assert!(Minutes::parse("0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let value = parse_positive("duration", s)?;
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

/// Parse a strictly positive integer for `field`.
///
/// Empty input counts as missing.
pub(crate) fn parse_positive(field: &'static str, s: &str) -> Result<i64, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let value: i64 = s.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: s.to_owned(),
    })?;

    if value <= 0 {
        return Err(ValidationError::NotPositive { field });
    }

    Ok(value)
}
