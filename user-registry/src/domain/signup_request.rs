use serde::{Deserialize, Serialize};

use super::{Gender, Preference};

/// Raw registration form state, as submitted.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SignupRequestBody {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(alias = "confirm", alias = "confirmPassword")]
    pub confirm_password: String,
    #[serde(default)]
    pub preference: Preference,
    #[serde(default)]
    pub gender: Gender,
    #[serde(alias = "acceptTerms")]
    pub accept_terms: bool,
}
