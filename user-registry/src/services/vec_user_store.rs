use log::{debug, info, warn};

use crate::domain::{User, UserStore, UserStoreError};
use crate::utils::DEFAULT_MAX_USERS;

/// Bounded in-memory store keeping users in insertion order.
pub struct VecUserStore {
    users: Vec<User>,
    max_users: usize,
}

impl VecUserStore {
    pub fn new() -> Self {
        Self::bounded(DEFAULT_MAX_USERS)
    }

    pub fn bounded(max_users: usize) -> Self {
        VecUserStore {
            users: Vec::with_capacity(max_users),
            max_users,
        }
    }
}

impl Default for VecUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for VecUserStore {
    fn register(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.len() >= self.max_users {
            warn!("rejecting {}: store is full", user.email());
            return Err(UserStoreError::CapacityExceeded {
                capacity: self.max_users,
            });
        }
        if self
            .users
            .iter()
            .any(|existing| existing.email().matches(user.email().as_ref()))
        {
            warn!("rejecting {}: email already registered", user.email());
            return Err(UserStoreError::DuplicateEmail(
                user.email().as_ref().to_string(),
            ));
        }
        info!(
            "registered {} ({}/{})",
            user.email(),
            self.users.len() + 1,
            self.max_users
        );
        self.users.push(user);
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> bool {
        let authenticated = self
            .find_by_email(email)
            .is_some_and(|user| user.password().as_ref() == password);
        debug!("authentication for {:?}: {}", email.trim(), authenticated);
        authenticated
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email().matches(email))
    }

    fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn capacity(&self) -> usize {
        self.max_users
    }

    fn reset_for_testing(&mut self) {
        self.users.clear();
    }
}
