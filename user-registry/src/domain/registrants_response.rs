use serde::{Deserialize, Serialize};

use super::{Gender, Preference, User};

/// What the users table shows for one registrant. Carries no password.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Registrant {
    pub name: String,
    pub email: String,
    pub preference: Preference,
    pub gender: Gender,
}

impl From<&User> for Registrant {
    fn from(user: &User) -> Self {
        Registrant {
            name: user.name().to_string(),
            email: user.email().as_ref().to_string(),
            preference: user.preference(),
            gender: user.gender().clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct RegistrantsResponse {
    pub registrants: Vec<Registrant>,
    pub count: usize,
    pub capacity: usize,
    pub has_capacity: bool,
}
