use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be a positive whole number, got {raw:?}")]
    InvalidAge { raw: String },
}

/// Who is taking the assessment.
///
/// Built in two steps during the intro stage and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: String,
    age: u32,
}

impl UserProfile {
    /// Validate both fields and build a profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` for a blank name and
    /// `ProfileError::InvalidAge` when the age is not a positive integer.
    pub fn new(name: &str, age: &str) -> Result<Self, ProfileError> {
        Ok(Self {
            name: parse_name(name)?,
            age: parse_age(age)?,
        })
    }

    pub(crate) fn from_parts(name: String, age: u32) -> Self {
        Self { name, age }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Trim and validate a name entered on the intro form.
///
/// # Errors
///
/// Returns `ProfileError::EmptyName` if nothing but whitespace was entered.
pub fn parse_name(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parse an age entered as free text.
///
/// # Errors
///
/// Returns `ProfileError::InvalidAge` for non-numeric input, zero, negatives
/// and values that overflow `u32`.
pub fn parse_age(raw: &str) -> Result<u32, ProfileError> {
    let invalid = || ProfileError::InvalidAge {
        raw: raw.to_string(),
    };
    let age: u32 = raw.trim().parse().map_err(|_| invalid())?;
    if age == 0 {
        return Err(invalid());
    }
    Ok(age)
}
