//! # Vernoquill
//!
//! The main entry point for the Actix-web blog server.

use actix_files::Files;
use actix_session::{SessionMiddleware, config::PersistentSession, config::TtlExtensionPolicy, storage::CookieSessionStore};
use actix_web::cookie::{Key, time::Duration};
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod views;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Vernoquill blog server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).map_err(|e| std::io::Error::other(e.to_string()))?;

    let session_key = config.session_key();
    let static_dir = config.static_dir.clone();

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(session_middleware(session_key.clone()))
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Signed-cookie sessions: 24-hour sliding window, `secure` off since no
/// transport-layer encryption is assumed in front of this server.
pub(crate) fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(Duration::hours(24))
                .session_ttl_extension_policy(TtlExtensionPolicy::OnEveryRequest),
        )
        .build()
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vernoquill=debug,vernoquill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
