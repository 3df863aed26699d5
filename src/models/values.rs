// Request values validated at the HTTP boundary.
use std::fmt;

use crate::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        non_blank(raw, "Activity name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Participant email. Only blank values are rejected; no format check is made
/// and the value is kept byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        non_blank(raw, "Email").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_blank(raw: &str, field: &str) -> Result<String, RegistryError> {
    if raw.trim().is_empty() {
        return Err(RegistryError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(raw.to_string())
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surrounding_whitespace() {
        let email = Email::parse("  newstudent@mergington.edu ").unwrap();
        assert_eq!(email.as_str(), "  newstudent@mergington.edu ");
        let name = ActivityName::parse("Chess Club ").unwrap();
        assert_eq!(name.as_str(), "Chess Club ");
    }

    #[test]
    fn rejects_blank_values() {
        let err = Email::parse("   ").unwrap_err();
        assert_eq!(err.to_string(), "Email must not be empty");
        assert!(ActivityName::parse("").is_err());
    }

    #[test]
    fn accepts_any_non_blank_email() {
        assert!(Email::parse("not-an-email").is_ok());
    }
}
