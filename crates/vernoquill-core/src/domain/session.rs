use serde::{Deserialize, Serialize};

/// The slice of writer identity stored in the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
}
