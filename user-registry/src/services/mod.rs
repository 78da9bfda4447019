pub mod auth;
pub mod vec_user_store;

pub use auth::*;
pub use vec_user_store::*;
