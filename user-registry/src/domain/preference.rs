use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accessibility level chosen at registration.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preference {
    #[default]
    High,
    Medium,
    Low,
}

impl Preference {
    pub const ALL: [Preference; 3] = [Preference::High, Preference::Medium, Preference::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::High => "High",
            Preference::Medium => "Medium",
            Preference::Low => "Low",
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown preference level: {0}")]
pub struct ParsePreferenceError(String);

impl FromStr for Preference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePreferenceError(s.to_string()))
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
