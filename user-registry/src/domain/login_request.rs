use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}
