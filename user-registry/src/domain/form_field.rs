use serde::{Deserialize, Serialize};

/// Form input an error message belongs to.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Password,
    Confirmation,
    Terms,
}
