//! Authentication ports.

use crate::error::AuthError;

/// Password hashing service for PHC-format hashed credentials.
pub trait PasswordVerifier: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash using a constant-time comparison.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
