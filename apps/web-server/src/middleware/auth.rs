//! Session-based authentication extractors.

use actix_session::SessionExt;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, http::StatusCode, http::header};
use std::future::{Ready, ready};

use vernoquill_core::domain::SessionUser;

/// Session key for the authentication flag.
pub const AUTH_FLAG_KEY: &str = "is_authenticated";
/// Session key for the logged-in writer.
pub const SESSION_USER_KEY: &str = "user";

/// Authenticated writer extractor - the auth gate.
///
/// Use this in handlers to require a logged-in writer:
/// ```ignore
/// async fn protected_route(identity: WriterIdentity) -> impl Responder {
///     format!("Hello, {}!", identity.user.username)
/// }
/// ```
///
/// Extraction fails unless the session carries `is_authenticated = true`
/// together with a stored user; the failure response is a redirect to the
/// login page with an informational error message.
#[derive(Debug, Clone)]
pub struct WriterIdentity {
    pub user: SessionUser,
}

/// The DENY half of the auth gate: a redirect to the login page.
#[derive(Debug)]
pub struct AuthRequired;

impl std::fmt::Display for AuthRequired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "writer authentication required")
    }
}

impl actix_web::ResponseError for AuthRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, login_redirect_target()))
            .finish()
    }
}

/// Where denied requests are sent.
pub fn login_redirect_target() -> String {
    format!(
        "/login?error={}",
        urlencoding::encode("Please log in to access this page")
    )
}

impl FromRequest for WriterIdentity {
    type Error = AuthRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        // An unreadable or absent flag is treated the same as an
        // unauthenticated session.
        let authenticated = session
            .get::<bool>(AUTH_FLAG_KEY)
            .ok()
            .flatten()
            .unwrap_or(false);

        if !authenticated {
            return ready(Err(AuthRequired));
        }

        match session.get::<SessionUser>(SESSION_USER_KEY) {
            Ok(Some(user)) => ready(Ok(WriterIdentity { user })),
            _ => ready(Err(AuthRequired)),
        }
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
/// Used by public pages to render the navigation's login state.
pub struct OptionalWriterIdentity(pub Option<WriterIdentity>);

impl FromRequest for OptionalWriterIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match WriterIdentity::from_request(req, payload).into_inner() {
            Ok(identity) => ready(Ok(OptionalWriterIdentity(Some(identity)))),
            Err(_) => ready(Ok(OptionalWriterIdentity(None))),
        }
    }
}
