//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod store;

pub use auth::PasswordVerifier;
pub use store::{PostStore, WriterStore};
