use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RecoveryRequestBody {
    pub email: String,
}
