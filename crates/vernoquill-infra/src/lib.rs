//! # Vernoquill Infrastructure
//!
//! Concrete implementations of the ports defined in `vernoquill-core`:
//! the in-memory post store, the static writer directory, and the Argon2
//! password verifier.

pub mod auth;
pub mod store;

pub use auth::{Argon2PasswordVerifier, WriterDirectory};
pub use store::MemoryPostStore;
