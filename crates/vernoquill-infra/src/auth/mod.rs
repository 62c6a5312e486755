//! Authentication adapters: the static writer directory and the Argon2
//! password verifier.

mod directory;
mod password;

pub use directory::WriterDirectory;
pub use password::Argon2PasswordVerifier;
