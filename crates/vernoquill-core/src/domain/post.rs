use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum excerpt length in characters, before the ellipsis marker.
pub const EXCERPT_LEN: usize = 150;

/// Post entity - a single blog article.
///
/// `excerpt` is always the deterministic truncation of the current `content`;
/// it is re-derived whenever content changes. `id` and `date` are fixed at
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub content: String,
}

impl Post {
    /// Create a new post dated today from a validated draft.
    pub fn new(id: u64, draft: PostDraft) -> Self {
        let excerpt = excerpt_of(&draft.content);
        Self {
            id,
            title: draft.title,
            author: draft.author,
            date: chrono::Utc::now().date_naive(),
            excerpt,
            content: draft.content,
        }
    }

    /// Replace title, author and content in place, re-deriving the excerpt.
    /// Id and date are preserved.
    pub fn apply(&mut self, draft: PostDraft) {
        self.excerpt = excerpt_of(&draft.content);
        self.title = draft.title;
        self.author = draft.author;
        self.content = draft.content;
    }
}

/// Validated input for creating or updating a post.
///
/// Construction trims all three fields and rejects the draft if any of them
/// ends up empty.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: &str, author: &str, content: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        let author = author.trim();
        let content = content.trim();

        if title.is_empty() || author.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
        })
    }
}

/// Derive a preview excerpt from post content.
///
/// The first [`EXCERPT_LEN`] characters plus a `...` marker when the content
/// is longer, otherwise the content unchanged. Counted in `char`s so
/// multi-byte content never splits at a byte boundary.
pub fn excerpt_of(content: &str) -> String {
    if content.chars().count() <= EXCERPT_LEN {
        content.to_string()
    } else {
        let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
        excerpt.push_str("...");
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_its_own_excerpt() {
        assert_eq!(excerpt_of("hello world"), "hello world");
    }

    #[test]
    fn content_at_threshold_is_not_truncated() {
        let content = "a".repeat(EXCERPT_LEN);
        assert_eq!(excerpt_of(&content), content);
    }

    #[test]
    fn long_content_is_truncated_with_marker() {
        let content = "x".repeat(200);
        let excerpt = excerpt_of(&content);
        assert_eq!(excerpt, format!("{}...", "x".repeat(EXCERPT_LEN)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content = "é".repeat(200);
        let excerpt = excerpt_of(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
        assert!(excerpt.starts_with('é'));
    }

    #[test]
    fn draft_trims_whitespace() {
        let draft = PostDraft::new("  Title ", " Bob ", " body ").unwrap();
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.author, "Bob");
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn draft_rejects_blank_fields() {
        assert!(PostDraft::new("", "Bob", "body").is_err());
        assert!(PostDraft::new("Title", "   ", "body").is_err());
        assert!(PostDraft::new("Title", "Bob", "\n\t").is_err());
    }

    #[test]
    fn apply_preserves_id_and_date() {
        let draft = PostDraft::new("Title", "Bob", "body").unwrap();
        let mut post = Post::new(7, draft);
        let date = post.date;

        let edit = PostDraft::new("New", "Alice", &"y".repeat(200)).unwrap();
        post.apply(edit);

        assert_eq!(post.id, 7);
        assert_eq!(post.date, date);
        assert_eq!(post.title, "New");
        assert_eq!(post.excerpt, excerpt_of(&post.content));
    }
}
