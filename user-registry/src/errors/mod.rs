mod login;
mod recovery;
mod signup;

pub use login::*;
pub use recovery::*;
pub use signup::*;
