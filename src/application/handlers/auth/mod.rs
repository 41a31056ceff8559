//! Account registration and login.

mod login;
mod register;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register::{RegisterCommand, RegisterHandler};
