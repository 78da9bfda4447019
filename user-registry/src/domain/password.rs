use crate::validation::password_meets_min_length;
use crate::utils::MIN_PASSWORD_LENGTH;

use super::UserError;

#[derive(PartialEq, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, UserError> {
        match password_meets_min_length(&password) {
            true => Ok(Password(password)),
            false => Err(UserError::PasswordTooShort(MIN_PASSWORD_LENGTH)),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}
