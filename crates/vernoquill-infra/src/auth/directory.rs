//! Static writer directory.
//!
//! Writers are fixed at startup; there is no signup or account management.

use async_trait::async_trait;

use vernoquill_core::domain::{StoredCredential, Writer};
use vernoquill_core::ports::WriterStore;

/// The fixed set of writer identities, built once at process start.
pub struct WriterDirectory {
    writers: Vec<Writer>,
}

impl WriterDirectory {
    pub fn new(writers: Vec<Writer>) -> Self {
        Self { writers }
    }

    /// A directory holding a single writer, the common deployment shape.
    pub fn single(username: &str, credential: StoredCredential) -> Self {
        Self::new(vec![Writer {
            id: 1,
            username: username.to_string(),
            credential,
        }])
    }
}

#[async_trait]
impl WriterStore for WriterDirectory {
    async fn find_by_username(&self, username: &str) -> Option<Writer> {
        self.writers.iter().find(|w| w.username == username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let directory = WriterDirectory::single(
            "writer",
            StoredCredential::Plaintext("password123".to_string()),
        );

        assert!(directory.find_by_username("writer").await.is_some());
        assert!(directory.find_by_username("Writer").await.is_none());
        assert!(directory.find_by_username("nobody").await.is_none());
    }
}
