//! Handler for publishing a post.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Form;
use postboard_core::error::CoreError;
use postboard_core::types::submitted_at_now;
use postboard_db::models::post::{Post, SubmitPost};
use postboard_db::repositories::{PostRepo, VisitorRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /submit
///
/// Publish a post if `pass` equals the shared secret. A wrong secret is not
/// an error: the post is dropped and the client is sent home like on
/// success. With the right secret, `content` and `title` are required.
pub async fn submit_post(
    State(state): State<AppState>,
    form: Result<Form<SubmitPost>, FormRejection>,
) -> AppResult<HomeRedirect> {
    VisitorRepo::record_visit(state.store()).await?;

    let Form(input) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let pass = input.pass.ok_or_else(|| CoreError::missing_field("pass"))?;
    if pass != state.config.submit_secret {
        tracing::warn!("Post submission rejected: shared secret mismatch");
        return Ok(home_redirect());
    }

    let content = input
        .content
        .ok_or_else(|| CoreError::missing_field("content"))?;
    let title = input.title.ok_or_else(|| CoreError::missing_field("title"))?;

    let post = Post {
        content,
        title,
        submitted_at: submitted_at_now(),
    };
    let submitted_at = post.submitted_at.clone();
    let posts = PostRepo::prepend(state.store(), post).await?;

    tracing::info!(
        submitted_at = %submitted_at,
        post_count = posts.len(),
        "Post published",
    );

    Ok(home_redirect())
}

/// `302 Found` back to the home page.
pub type HomeRedirect = (StatusCode, [(HeaderName, &'static str); 1]);

fn home_redirect() -> HomeRedirect {
    (StatusCode::FOUND, [(LOCATION, "/")])
}
