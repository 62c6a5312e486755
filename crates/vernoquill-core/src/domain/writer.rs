/// Writer entity - an identity allowed to author posts.
///
/// Writers are static for the process lifetime; there is no signup flow.
#[derive(Debug, Clone)]
pub struct Writer {
    pub id: u64,
    pub username: String,
    pub credential: StoredCredential,
}

/// A stored password credential.
///
/// Two variants instead of an inline type-sniffing branch: a PHC-format
/// Argon2 hash, or a raw plaintext password for development setups. Plaintext
/// comparison is only honored when explicitly enabled in configuration.
#[derive(Debug, Clone)]
pub enum StoredCredential {
    Hashed(String),
    Plaintext(String),
}

impl StoredCredential {
    /// Classify a raw stored credential by its structural marker. PHC Argon2
    /// strings always start with `$argon2`.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("$argon2") {
            Self::Hashed(raw.to_string())
        } else {
            Self::Plaintext(raw.to_string())
        }
    }
}
