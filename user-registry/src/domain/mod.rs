pub mod data_stores;
pub mod email;
pub mod form_field;
pub mod gender;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod preference;
pub mod recovery_request;
pub mod recovery_response;
pub mod registrants_response;
pub mod signup_request;
pub mod signup_response;
mod user;

pub use data_stores::*;
pub use email::*;
pub use form_field::*;
pub use gender::*;
pub use login_request::*;
pub use login_response::*;
pub use password::*;
pub use preference::*;
pub use recovery_request::*;
pub use recovery_response::*;
pub use registrants_response::*;
pub use signup_request::*;
pub use signup_response::*;
pub use user::*;
