use std::env as std_env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{env, DEFAULT_MAX_USERS};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    max_users: usize,
}

impl Config {
    pub fn new(max_users: usize) -> Result<Self, ConfigError> {
        if max_users == 0 {
            return Err(ConfigError::Invalid(env::MAX_USERS_ENV_VAR));
        }
        Ok(Self { max_users })
    }

    pub fn max_users(&self) -> usize {
        self.max_users
    }

    /// Loads `.env` when present, then reads the optional overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let max_users = match opt_var(env::MAX_USERS_ENV_VAR) {
            Some(raw) => parse_max_users(&raw)?,
            None => DEFAULT_MAX_USERS,
        };
        Self::new(max_users)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_users: DEFAULT_MAX_USERS,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn opt_var(key: &str) -> Option<String> {
    std_env::var(key).ok()
}

fn parse_max_users(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid(env::MAX_USERS_ENV_VAR))
}
