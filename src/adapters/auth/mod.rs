//! Token adapters.

mod jwt;
mod mock;

pub use jwt::JwtAuthenticator;
pub use mock::MockSessionValidator;
