use axum::extract::State;
use postboard_core::responses;
use postboard_db::repositories::VisitorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /visitors
///
/// Counts the request like every other route, then counts once more while
/// reading the total back. A fresh store therefore reports 1.
pub async fn visitor_count(State(state): State<AppState>) -> AppResult<String> {
    VisitorRepo::record_visit(state.store()).await?;

    let body = match VisitorRepo::record_and_read(state.store()).await? {
        Some(counter) => responses::visitor_total(counter.total),
        None => responses::VISITOR_COUNT_UNAVAILABLE.to_string(),
    };

    Ok(body)
}
