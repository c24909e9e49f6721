pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{diagnostics, pages, posts, visitors};
use crate::state::AppState;

/// Build the site route table.
///
/// ```text
/// GET  /            home page (rendered posts)
/// GET  /editor      post submission form
/// POST /submit      publish a post (shared secret)
/// GET  /visitors    visit total
/// GET  /version     fixed app version string
/// GET  /instance    platform instance id
/// GET  /version-id  platform version id
/// ```
///
/// Every route here counts a visit.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/editor", get(pages::editor))
        .route("/submit", post(posts::submit_post))
        .route("/visitors", get(visitors::visitor_count))
        .route("/version", get(diagnostics::app_version))
        .route("/instance", get(diagnostics::instance_id))
        .route("/version-id", get(diagnostics::version_id))
}
