//! Password hashing port.

use thiserror::Error;

/// Failure inside the hashing backend (not a password mismatch).
#[derive(Debug, Clone, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// One-way password hashing.
///
/// `verify` returns `Ok(false)` for a wrong password and reserves `Err`
/// for malformed hashes or backend failures.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
