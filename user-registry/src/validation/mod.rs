mod email;
mod form;
mod password;

pub use email::*;
pub use form::*;
pub use password::*;
