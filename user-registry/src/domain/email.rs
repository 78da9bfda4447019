use crate::validation::{is_non_blank, is_valid_email_shape};

use super::UserError;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(email: String) -> Result<Email, UserError> {
        if !is_non_blank(&email) {
            return Err(UserError::BlankEmail);
        }
        match is_valid_email_shape(&email) {
            true => Ok(Email(email)),
            false => Err(UserError::InvalidEmail(email)),
        }
    }

    /// Case-insensitive comparison against a trimmed lookup key. A parsed
    /// email is always ASCII, so ASCII folding is the whole comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
