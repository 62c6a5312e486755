//! Post listing and lifecycle handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use vernoquill_core::domain::PostDraft;

use crate::middleware::auth::{OptionalWriterIdentity, WriterIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, Flash};

use super::{html_page, nav_for, redirect_error, redirect_success};

/// Form body for creating and editing posts. Fields default to empty so a
/// missing field becomes a validation error instead of a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl PostForm {
    fn draft(&self) -> Result<PostDraft, vernoquill_core::DomainError> {
        PostDraft::new(&self.title, &self.author, &self.content)
    }
}

/// GET / - the public post list.
pub async fn index(
    state: web::Data<AppState>,
    flash: web::Query<Flash>,
    identity: OptionalWriterIdentity,
) -> HttpResponse {
    let posts = state.posts.list().await;
    html_page(views::index_page(&posts, &flash, &nav_for(&identity)))
}

/// GET /post/{id} - a single post, 404 page when absent.
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    flash: web::Query<Flash>,
    identity: OptionalWriterIdentity,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get(path.into_inner())
        .await
        .ok_or(AppError::NotFound)?;

    Ok(html_page(views::post_page(&post, &flash, &nav_for(&identity))))
}

/// POST /posts - create a post (auth required).
pub async fn create(
    state: web::Data<AppState>,
    identity: WriterIdentity,
    form: web::Form<PostForm>,
) -> HttpResponse {
    let draft = match form.draft() {
        Ok(draft) => draft,
        Err(_) => return redirect_error("/", "Please fill in all fields"),
    };

    let post = state.posts.create(draft).await;
    tracing::info!(post.id = post.id, writer = %identity.user.username, "post created");
    redirect_success("/", "Post created successfully")
}

/// GET /post/{id}/edit - pre-filled edit form (auth required).
pub async fn edit_form(
    state: web::Data<AppState>,
    identity: WriterIdentity,
    path: web::Path<u64>,
    flash: web::Query<Flash>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get(path.into_inner())
        .await
        .ok_or(AppError::NotFound)?;

    let nav = views::Nav {
        username: Some(identity.user.username),
    };
    Ok(html_page(views::edit_page(&post, &flash, &nav)))
}

/// POST /post/{id}/edit - update a post (auth required).
///
/// Unknown ids 404 before field validation, so an edit form posted against a
/// deleted post doesn't bounce back to a form that no longer exists.
pub async fn update(
    state: web::Data<AppState>,
    identity: WriterIdentity,
    path: web::Path<u64>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.posts.get(id).await.is_none() {
        return Err(AppError::NotFound);
    }

    let draft = match form.draft() {
        Ok(draft) => draft,
        Err(_) => {
            return Ok(redirect_error(
                &format!("/post/{id}/edit"),
                "Please fill in all fields",
            ));
        }
    };

    state.posts.update(id, draft).await?;
    tracing::info!(post.id = id, writer = %identity.user.username, "post updated");
    Ok(redirect_success(
        &format!("/post/{id}"),
        "Post updated successfully",
    ))
}

/// POST /post/{id}/delete - delete a post (auth required).
///
/// Not-found renders the same 404 page as the view routes; the structured
/// error payload the original used only here was an inconsistency.
pub async fn delete(
    state: web::Data<AppState>,
    identity: WriterIdentity,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post.id = id, writer = %identity.user.username, "post deleted");
    Ok(redirect_success("/", "Post deleted successfully"))
}
