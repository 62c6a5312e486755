//! Login, logout and dashboard handlers.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use vernoquill_core::domain::{SessionUser, StoredCredential, Writer};
use vernoquill_core::error::AuthError;

use crate::middleware::auth::{AUTH_FLAG_KEY, OptionalWriterIdentity, SESSION_USER_KEY, WriterIdentity};
use crate::state::AppState;
use crate::views::{self, Flash, Nav};

use super::{html_page, nav_for, redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const AUTH_FAILURE: &str = "Authentication error, please try again";

/// GET /login
pub async fn login_form(
    flash: web::Query<Flash>,
    identity: OptionalWriterIdentity,
) -> HttpResponse {
    tracing::debug!("login form requested");
    html_page(views::login_page(&flash, &nav_for(&identity)))
}

/// Run the credential check against the writer directory.
///
/// Unknown usernames and wrong passwords both collapse into
/// [`AuthError::InvalidCredentials`] so callers cannot distinguish them.
async fn authenticate(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Writer, AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let writer = state
        .writers
        .find_by_username(username)
        .await
        .ok_or(AuthError::InvalidCredentials)?;

    let matched = match &writer.credential {
        StoredCredential::Hashed(hash) => state.verifier.verify(password, hash)?,
        StoredCredential::Plaintext(stored) => {
            if !state.allow_plaintext_passwords {
                return Err(AuthError::PlaintextDisabled);
            }
            stored == password
        }
    };

    if matched {
        Ok(writer)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let writer = match authenticate(&state, &form.username, &form.password).await {
        Ok(writer) => writer,
        Err(AuthError::MissingCredentials) => {
            return redirect_error("/login", "Please provide both username and password");
        }
        Err(AuthError::InvalidCredentials) => {
            return redirect_error("/login", INVALID_CREDENTIALS);
        }
        Err(e) => {
            // Verifier failures are fatal to the request but surface the
            // same generic message either way.
            tracing::error!(error = %e, "credential verification failed");
            return redirect_error("/login", AUTH_FAILURE);
        }
    };

    // Fresh cookie on privilege change.
    session.renew();
    let user = SessionUser {
        id: writer.id,
        username: writer.username.clone(),
    };
    let established = session
        .insert(AUTH_FLAG_KEY, true)
        .and_then(|()| session.insert(SESSION_USER_KEY, &user));
    if let Err(e) = established {
        tracing::error!(error = %e, "failed to establish session");
        return redirect_error("/login", AUTH_FAILURE);
    }

    tracing::info!(writer = %writer.username, "writer logged in");
    redirect_success("/dashboard", "Successfully logged in as writer")
}

/// POST /logout - always lands back on the home page. The cookie store's
/// purge cannot fail, so there is no error branch to redirect through.
pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect_success("/", "Successfully logged out")
}

/// GET /dashboard (auth required)
pub async fn dashboard(
    state: web::Data<AppState>,
    identity: WriterIdentity,
    flash: web::Query<Flash>,
) -> HttpResponse {
    let posts = state.posts.list().await;
    let nav = Nav {
        username: Some(identity.user.username),
    };
    html_page(views::dashboard_page(&posts, &flash, &nav))
}
