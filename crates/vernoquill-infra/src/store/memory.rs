//! In-memory post store.
//!
//! Holds the ordered post list behind an async `RwLock` so every port
//! operation is atomic under actix's multi-threaded runtime. Data is lost on
//! process restart.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use vernoquill_core::domain::{Post, PostDraft, excerpt_of};
use vernoquill_core::error::DomainError;
use vernoquill_core::ports::PostStore;

struct StoreInner {
    /// Newest-first: creation pushes to the front.
    posts: Vec<Post>,
    /// Monotonic id counter. Never decremented, so deleting the
    /// highest-numbered post cannot cause id reuse.
    next_id: u64,
}

/// In-memory post store using a `Vec` with an async `RwLock`.
pub struct MemoryPostStore {
    inner: RwLock<StoreInner>,
}

impl MemoryPostStore {
    /// An empty store; the first created post gets id 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store pre-populated with the three sample posts.
    pub fn seeded() -> Self {
        let samples = [
            (
                1,
                "Welcome to Vernoquill",
                "Admin",
                seed_date(2025, 9, 29),
                "Welcome to Vernoquill, your new favorite blogging platform. This is a \
                 sample post to demonstrate the blog functionality. You can write about \
                 anything you're passionate about - technology, lifestyle, travel, or any \
                 topic that interests you. The platform is built for a smooth and \
                 responsive writing experience.",
            ),
            (
                2,
                "Writing for the Web",
                "Tech Writer",
                seed_date(2025, 9, 28),
                "Good web writing is scannable. Readers skim headlines, excerpts and the \
                 first sentence of each paragraph before committing to a full read, so \
                 front-load your point. Short paragraphs, concrete verbs and a clear \
                 excerpt go a long way toward keeping readers on the page.",
            ),
            (
                3,
                "Getting Started as a Writer",
                "Developer",
                seed_date(2025, 9, 27),
                "Log in with your writer account to reach the dashboard, where you can \
                 draft new posts and edit or remove existing ones. Every post needs a \
                 title, an author and some content; the preview excerpt on the front \
                 page is generated for you from the first part of the content.",
            ),
        ];

        let posts = samples
            .into_iter()
            .map(|(id, title, author, date, content)| Post {
                id,
                title: title.to_string(),
                author: author.to_string(),
                date,
                excerpt: excerpt_of(content),
                content: content.to_string(),
            })
            .collect();

        Self::with_posts(posts)
    }

    fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(StoreInner { posts, next_id }),
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    async fn get(&self, id: u64) -> Option<Post> {
        let inner = self.inner.read().await;
        inner.posts.iter().find(|p| p.id == id).cloned()
    }

    async fn create(&self, draft: PostDraft) -> Post {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let post = Post::new(id, draft);
        inner.posts.insert(0, post.clone());

        tracing::debug!(post.id = id, "created post");
        post
    }

    async fn update(&self, id: u64, draft: PostDraft) -> Result<Post, DomainError> {
        let mut inner = self.inner.write().await;
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.apply(draft);
        Ok(post.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        inner.posts.remove(index);
        tracing::debug!(post.id = id, "deleted post");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernoquill_core::domain::EXCERPT_LEN;

    fn draft(title: &str, author: &str, content: &str) -> PostDraft {
        PostDraft::new(title, author, content).unwrap()
    }

    #[tokio::test]
    async fn seeded_store_lists_three_posts_newest_first() {
        let store = MemoryPostStore::seeded();
        let posts = store.list().await;
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3]);
        assert!(posts[0].date > posts[1].date);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_inserts_at_front() {
        let store = MemoryPostStore::seeded();
        let content = "x".repeat(200);
        let post = store.create(draft("Test", "Bob", &content)).await;

        assert_eq!(post.id, 4);
        assert_eq!(post.excerpt, format!("{}...", "x".repeat(EXCERPT_LEN)));

        let posts = store.list().await;
        assert_eq!(posts[0].id, 4);
        assert_eq!(posts.len(), 4);
    }

    #[tokio::test]
    async fn create_then_get_returns_derived_excerpt() {
        let store = MemoryPostStore::new();
        let created = store.create(draft("T", "A", "short content")).await;

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.excerpt, "short content");
        assert_eq!(fetched.excerpt, excerpt_of(&fetched.content));
    }

    #[tokio::test]
    async fn first_id_in_empty_store_is_one() {
        let store = MemoryPostStore::new();
        let post = store.create(draft("T", "A", "c")).await;
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing_and_never_reused() {
        let store = MemoryPostStore::new();
        let a = store.create(draft("A", "A", "a")).await;
        let b = store.create(draft("B", "B", "b")).await;
        assert!(b.id > a.id);

        // Deleting the highest-numbered post must not recycle its id.
        store.delete(b.id).await.unwrap();
        let c = store.create(draft("C", "C", "c")).await;
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn update_preserves_id_date_and_order() {
        let store = MemoryPostStore::seeded();
        let before = store.get(2).await.unwrap();

        let updated = store
            .update(2, draft("Changed", "Alice", "new content"))
            .await
            .unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.date, before.date);
        assert_eq!(updated.title, "Changed");
        assert_eq!(updated.excerpt, "new content");

        let ids: Vec<_> = store.list().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let store = MemoryPostStore::seeded();
        let err = store.update(99, draft("T", "A", "c")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 99, .. }));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_relative_order() {
        let store = MemoryPostStore::seeded();
        store.delete(2).await.unwrap();

        let ids: Vec<_> = store.list().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let store = MemoryPostStore::seeded();
        assert!(store.delete(42).await.is_err());
        assert_eq!(store.list().await.len(), 3);
    }
}
