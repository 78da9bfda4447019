//! In-memory user registry behind a registration and login flow.
//!
//! [`AppState`](app_state::AppState) is the handle callers own: it holds a
//! bounded [`UserStore`](domain::UserStore) and the [`Config`](utils::Config)
//! it was built from. [`AuthService`](services::AuthService) runs the form
//! flows against it.

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;
pub mod validation;
