use thiserror::Error;

use crate::domain::FormField;

#[derive(Error, Debug, PartialEq)]
pub enum RecoveryError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("No account is associated with this email")]
    AccountNotFound,
}

impl RecoveryError {
    pub fn field(&self) -> Option<FormField> {
        match self {
            RecoveryError::EmailRequired | RecoveryError::InvalidEmail => Some(FormField::Email),
            RecoveryError::AccountNotFound => None,
        }
    }
}
