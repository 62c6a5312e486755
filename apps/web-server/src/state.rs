//! Application state - shared across all handlers.

use std::sync::Arc;

use vernoquill_core::domain::StoredCredential;
use vernoquill_core::error::AuthError;
use vernoquill_core::ports::{PasswordVerifier, PostStore, WriterStore};
use vernoquill_infra::{Argon2PasswordVerifier, MemoryPostStore, WriterDirectory};

use crate::config::AppConfig;

/// Shared application state. Constructed once at process start and handed to
/// every handler; tests build a fresh one per case.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub writers: Arc<dyn WriterStore>,
    pub verifier: Arc<dyn PasswordVerifier>,
    pub allow_plaintext_passwords: bool,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// The writer credential is resolved here: a pre-computed hash wins,
    /// plaintext is kept only when explicitly allowed, and otherwise the
    /// configured password is hashed at startup so the stored credential is
    /// never plaintext by accident.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let verifier: Arc<dyn PasswordVerifier> = Arc::new(Argon2PasswordVerifier::new());

        let credential = if let Some(hash) = &config.writer_password_hash {
            StoredCredential::parse(hash)
        } else if config.allow_plaintext_passwords {
            tracing::warn!("plaintext password comparison is enabled (dev mode)");
            StoredCredential::Plaintext(config.writer_password.clone())
        } else {
            StoredCredential::Hashed(verifier.hash(&config.writer_password)?)
        };

        let posts = if config.seed_demo_posts {
            MemoryPostStore::seeded()
        } else {
            MemoryPostStore::new()
        };

        tracing::info!(
            writer = %config.writer_username,
            seeded = config.seed_demo_posts,
            "application state initialized"
        );

        Ok(Self {
            posts: Arc::new(posts),
            writers: Arc::new(WriterDirectory::single(&config.writer_username, credential)),
            verifier,
            allow_plaintext_passwords: config.allow_plaintext_passwords,
        })
    }
}

#[cfg(test)]
impl AppState {
    /// A fresh seeded state per test: three sample posts and the dev writer
    /// with a plaintext credential.
    pub(crate) fn seeded_for_tests() -> Self {
        Self {
            posts: Arc::new(MemoryPostStore::seeded()),
            writers: Arc::new(WriterDirectory::single(
                "writer",
                StoredCredential::Plaintext("password123".to_string()),
            )),
            verifier: Arc::new(Argon2PasswordVerifier::new()),
            allow_plaintext_passwords: true,
        }
    }
}
