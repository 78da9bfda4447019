use super::UserStoreError;
use crate::domain::User;

// This trait represents the interface all concrete user stores should implement
pub trait UserStore: Send + Sync {
    /// Appends `user` unless the store is full or the email is taken.
    ///
    /// Capacity is checked before uniqueness, so a full store reports
    /// [`UserStoreError::CapacityExceeded`] even for a duplicate email.
    fn register(&mut self, user: User) -> Result<(), UserStoreError>;

    /// Never fails. Unknown email, wrong password and malformed input all
    /// answer `false`.
    fn authenticate(&self, email: &str, password: &str) -> bool;

    /// Trimmed, case-insensitive lookup in insertion order.
    fn find_by_email(&self, email: &str) -> Option<&User>;

    /// Snapshot in insertion order.
    fn list(&self) -> Vec<User>;

    fn count(&self) -> usize;

    fn capacity(&self) -> usize;

    fn has_capacity(&self) -> bool {
        self.count() < self.capacity()
    }

    /// Empties the store so a test can start from a clean state.
    fn reset_for_testing(&mut self);
}
