use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::VecUserStore;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type ConfigType = Arc<Config>;

/// Explicit handle to the registry. Cloning shares the same store.
#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(user_store: UserStoreType, config: ConfigType) -> Self {
        Self { user_store, config }
    }

    /// Empty in-memory store bounded by `config.max_users()`.
    pub fn in_memory(config: Config) -> Self {
        let user_store = VecUserStore::bounded(config.max_users());
        Self::new(Arc::new(RwLock::new(user_store)), Arc::new(config))
    }
}
