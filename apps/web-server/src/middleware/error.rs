//! Request-boundary error handling.
//!
//! Page routes surface two error shapes: a rendered 404 page for missing
//! posts, and a plain 500 for anything unexpected. Validation and auth
//! failures never reach this type - they are redirects, built in the
//! handlers and the auth extractor.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use std::fmt;

use vernoquill_core::error::DomainError;

use crate::views;

/// Application-level error type for page-rendering routes.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(views::not_found_page()),
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(views::internal_error_page())
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Validation(msg) => {
                // Handlers redirect on validation; one reaching this boundary
                // is a routing bug, not a user error.
                AppError::Internal(format!("unhandled validation error: {}", msg))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
