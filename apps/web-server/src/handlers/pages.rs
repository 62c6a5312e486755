//! Static-content pages.

use actix_web::HttpResponse;

use crate::middleware::auth::OptionalWriterIdentity;
use crate::views;

use super::{html_page, nav_for};

/// GET /about
pub async fn about(identity: OptionalWriterIdentity) -> HttpResponse {
    html_page(views::about_page(&nav_for(&identity)))
}
