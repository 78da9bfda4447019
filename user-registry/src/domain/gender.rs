use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the offered options or free text. Never rejected.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Female,
    Male,
    #[default]
    PreferNotToSay,
    Other(String),
}

impl Gender {
    pub const OPTIONS: [Gender; 3] = [Gender::Female, Gender::Male, Gender::PreferNotToSay];

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::PreferNotToSay => "Prefer not to say",
            Gender::Other(text) => text,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::OPTIONS
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(Gender::Other(value))
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Gender::from(s.to_string()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
