use thiserror::Error;

use crate::domain::{FormField, UserError};

#[derive(Error, Debug, PartialEq)]
pub enum SignupError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least {0} characters long")]
    NameTooShort(usize),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Terms and conditions must be accepted")]
    TermsNotAccepted,

    #[error("Maximum capacity reached ({0} users)")]
    CapacityExceeded(usize),

    #[error("The email {0} is already registered. Use a different email or sign in instead.")]
    UserAlreadyExists(String),
}

impl SignupError {
    /// Field the message belongs to; `None` for form-level messages.
    pub fn field(&self) -> Option<FormField> {
        match self {
            SignupError::NameRequired | SignupError::NameTooShort(_) => Some(FormField::Name),
            SignupError::InvalidEmail | SignupError::UserAlreadyExists(_) => Some(FormField::Email),
            SignupError::PasswordTooShort(_) => Some(FormField::Password),
            SignupError::PasswordMismatch => Some(FormField::Confirmation),
            SignupError::TermsNotAccepted => Some(FormField::Terms),
            SignupError::CapacityExceeded(_) => None,
        }
    }
}

impl From<UserError> for SignupError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::BlankName => SignupError::NameRequired,
            UserError::BlankEmail | UserError::InvalidEmail(_) => SignupError::InvalidEmail,
            UserError::PasswordTooShort(min) => SignupError::PasswordTooShort(min),
            UserError::TermsNotAccepted => SignupError::TermsNotAccepted,
        }
    }
}
