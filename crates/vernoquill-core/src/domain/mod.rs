//! Domain entities - the core business objects.

mod post;
mod session;
mod writer;

pub use post::{EXCERPT_LEN, Post, PostDraft, excerpt_of};
pub use session::SessionUser;
pub use writer::{StoredCredential, Writer};
