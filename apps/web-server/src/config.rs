//! Application configuration loaded from environment variables.

use std::env;

use actix_web::cookie::Key;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Signing secret for the session cookie. Must be at least 32 bytes;
    /// absent or too short falls back to a random per-process key.
    pub session_secret: Option<String>,
    /// Honor `Plaintext` stored credentials during login. Off by default;
    /// the stock writer password is Argon2-hashed at startup instead.
    pub allow_plaintext_passwords: bool,
    pub writer_username: String,
    pub writer_password: String,
    /// Pre-computed PHC hash for the writer. Takes precedence over
    /// `writer_password` when set.
    pub writer_password_hash: Option<String>,
    pub static_dir: String,
    /// Seed the three sample posts at startup.
    pub seed_demo_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            session_secret: env::var("SESSION_SECRET").ok(),
            allow_plaintext_passwords: env_bool("ALLOW_PLAINTEXT_PASSWORDS", false),
            writer_username: env::var("WRITER_USERNAME").unwrap_or_else(|_| "writer".to_string()),
            writer_password: env::var("WRITER_PASSWORD")
                .unwrap_or_else(|_| "password123".to_string()),
            writer_password_hash: env::var("WRITER_PASSWORD_HASH").ok(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            seed_demo_posts: env_bool("SEED_DEMO_POSTS", true),
        }
    }

    /// Derive the session signing key from the configured secret.
    ///
    /// `Key::derive_from` panics below 32 bytes of input, so short secrets
    /// are rejected up front. Without a usable secret a random key is
    /// generated, which invalidates all sessions on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
            Some(_) => {
                tracing::warn!(
                    "SESSION_SECRET is shorter than 32 bytes; using a random session key"
                );
                Key::generate()
            }
            None => {
                tracing::warn!(
                    "SESSION_SECRET not set; sessions will not survive a restart"
                );
                Key::generate()
            }
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
