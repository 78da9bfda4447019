/// Upper bound on simultaneously registered users.
pub const DEFAULT_MAX_USERS: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 2;

pub mod env {
    pub const MAX_USERS_ENV_VAR: &str = "REGISTRY_MAX_USERS";
}
