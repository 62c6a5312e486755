//! HTTP handlers and route configuration.

mod auth;
mod health;
mod pages;
mod posts;


use actix_web::{HttpResponse, http::header, http::header::ContentType, web};

use crate::middleware::auth::OptionalWriterIdentity;
use crate::middleware::error::AppError;
use crate::views::Nav;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // A non-numeric post id is a post that doesn't exist, not a bad
        // request: render the same 404 page as an unknown id.
        .app_data(
            web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()),
        )
        // Public pages
        .route("/", web::get().to(posts::index))
        .route("/post/{id}", web::get().to(posts::show))
        .route("/about", web::get().to(pages::about))
        .route("/healthz", web::get().to(health::healthz))
        // Writer routes (auth-gated via the WriterIdentity extractor)
        .route("/posts", web::post().to(posts::create))
        .route("/post/{id}/edit", web::get().to(posts::edit_form))
        .route("/post/{id}/edit", web::post().to(posts::update))
        .route("/post/{id}/delete", web::post().to(posts::delete))
        .route("/dashboard", web::get().to(auth::dashboard))
        // Session routes
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::post().to(auth::logout));
}

/// Render a page body as an HTML response.
pub(crate) fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// 302 redirect, matching the original server's redirect semantics.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn redirect_success(path: &str, message: &str) -> HttpResponse {
    redirect(&format!("{path}?success={}", urlencoding::encode(message)))
}

pub(crate) fn redirect_error(path: &str, message: &str) -> HttpResponse {
    redirect(&format!("{path}?error={}", urlencoding::encode(message)))
}

/// Navigation state from the (optional) session identity.
pub(crate) fn nav_for(identity: &OptionalWriterIdentity) -> Nav {
    Nav {
        username: identity
            .0
            .as_ref()
            .map(|identity| identity.user.username.clone()),
    }
}
