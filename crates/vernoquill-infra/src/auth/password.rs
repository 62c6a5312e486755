//! Argon2 password hashing implementation.
//!
//! Verification distinguishes three outcomes the login flow cares about:
//! a match, a mismatch (both `Ok`), and anything else - a stored credential
//! that is not a valid PHC string, or an internal argon2 failure - which is
//! an `Err` the caller treats as fatal to the request rather than as a
//! wrong password.

use argon2::password_hash::{
    Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier as _, SaltString,
    rand_core::OsRng,
};
use argon2::Argon2;

use vernoquill_core::error::AuthError;
use vernoquill_core::ports::PasswordVerifier;

/// Argon2-based password verifier. Comparison goes through the PHC
/// `PasswordHash` machinery, which is constant-time.
pub struct Argon2PasswordVerifier {
    argon2: Argon2<'static>,
}

impl Argon2PasswordVerifier {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordVerifier for Argon2PasswordVerifier {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            AuthError::HashingError(format!("stored credential is not a valid PHC string: {e}"))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            // A wrong password is a normal outcome, not a failure.
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let verifier = Argon2PasswordVerifier::new();
        let password = "password123";

        let hash = verifier.hash(password).unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verifier.verify(password, &hash).unwrap());
    }

    #[test]
    fn mismatch_is_ok_false_not_an_error() {
        let verifier = Argon2PasswordVerifier::new();
        let hash = verifier.hash("password123").unwrap();

        assert!(matches!(verifier.verify("wrong_password", &hash), Ok(false)));
    }

    #[test]
    fn garbage_hash_is_an_error_not_a_mismatch() {
        let verifier = Argon2PasswordVerifier::new();
        assert!(matches!(
            verifier.verify("password123", "not-a-phc-string"),
            Err(AuthError::HashingError(_))
        ));
    }
}
