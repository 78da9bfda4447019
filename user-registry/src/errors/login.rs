use thiserror::Error;

use crate::domain::FormField;

#[derive(Error, Debug, PartialEq)]
pub enum LoginError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    // Same message for unknown email and wrong password.
    #[error("Invalid credentials. Check your email and password.")]
    InvalidCredentials,
}

impl LoginError {
    pub fn field(&self) -> Option<FormField> {
        match self {
            LoginError::EmailRequired | LoginError::InvalidEmail => Some(FormField::Email),
            LoginError::PasswordRequired | LoginError::PasswordTooShort(_) => {
                Some(FormField::Password)
            }
            LoginError::InvalidCredentials => None,
        }
    }
}
