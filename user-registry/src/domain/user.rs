use thiserror::Error;

use super::{email::Email, gender::Gender, password::Password, preference::Preference};
use crate::validation::{is_non_blank, terms_accepted};

/// Why a candidate could not be built.
#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    #[error("name must not be blank")]
    BlankName,

    #[error("email must not be blank")]
    BlankEmail,

    #[error("email address {0} is not valid")]
    InvalidEmail(String),

    #[error("password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,
}

/// A registered user, or a candidate for registration.
///
/// Fields are only reachable through accessors, so a value of this type always
/// satisfies the shape checks performed by [`User::new`].
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    name: String,
    email: Email,
    password: Password,
    preference: Preference,
    accept_terms: bool,
    gender: Gender,
}

impl User {
    pub fn new(
        name: String,
        email: Email,
        password: Password,
        preference: Preference,
        accept_terms: bool,
        gender: Gender,
    ) -> Result<Self, UserError> {
        if !is_non_blank(&name) {
            return Err(UserError::BlankName);
        }
        if !terms_accepted(accept_terms) {
            return Err(UserError::TermsNotAccepted);
        }
        Ok(User {
            name,
            email,
            password,
            preference,
            accept_terms,
            gender,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn accept_terms(&self) -> bool {
        self.accept_terms
    }

    pub fn gender(&self) -> &Gender {
        &self.gender
    }
}
