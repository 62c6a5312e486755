use async_trait::async_trait;

use crate::domain::{Post, PostDraft, Writer};
use crate::error::DomainError;

/// Post store - the single owner of the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest-first (most recently created post first).
    async fn list(&self) -> Vec<Post>;

    /// Find a post by id. `None` is the not-found signal callers use to
    /// render a 404 state.
    async fn get(&self, id: u64) -> Option<Post>;

    /// Insert a new post at the front of the order. Id assignment and
    /// excerpt derivation happen here; the draft is already validated.
    async fn create(&self, draft: PostDraft) -> Post;

    /// Replace title, author, content and excerpt of an existing post,
    /// preserving its id, date and position in the order.
    async fn update(&self, id: u64, draft: PostDraft) -> Result<Post, DomainError>;

    /// Remove exactly one post. No other side effects.
    async fn delete(&self, id: u64) -> Result<(), DomainError>;
}

/// Writer lookup - the static credential directory.
#[async_trait]
pub trait WriterStore: Send + Sync {
    /// Find a writer by exact username match.
    async fn find_by_username(&self, username: &str) -> Option<Writer>;
}
