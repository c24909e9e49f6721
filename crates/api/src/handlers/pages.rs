//! Handlers for the HTML pages.

use axum::extract::State;
use axum::response::Html;
use postboard_core::render::render_page;
use postboard_core::responses;
use postboard_db::repositories::{PostRepo, VisitorRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /
///
/// Render every stored post, newest first, into the home page. Returns the
/// fixed no-posts message when nothing has been published yet.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    VisitorRepo::record_visit(state.store()).await?;

    let Some(collection) = PostRepo::list(state.store()).await? else {
        return Ok(Html(responses::NO_POSTS.to_string()));
    };

    let templates = &state.templates;
    let page = render_page(
        &templates.home,
        &templates.article,
        collection.posts.iter().map(|post| post.article_fields()),
    );

    Ok(Html(page))
}

/// GET /editor
///
/// Serve the post submission form unmodified.
pub async fn editor(State(state): State<AppState>) -> AppResult<Html<String>> {
    VisitorRepo::record_visit(state.store()).await?;

    Ok(Html(state.templates.editor.clone()))
}
