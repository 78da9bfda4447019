use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum UserStoreError {
    #[error("Maximum capacity reached ({capacity} users)")]
    CapacityExceeded { capacity: usize },

    #[error("The email {0} is already registered")]
    DuplicateEmail(String),
}
